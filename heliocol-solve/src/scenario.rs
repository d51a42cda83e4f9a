use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    f64::{Length, ThermodynamicTemperature, Velocity, VolumetricNumberDensity},
    length::astronomical_unit,
    thermodynamic_temperature::kelvin,
    velocity::kilometer_per_second,
    volumetric_number_density::per_cubic_centimeter,
};

use heliocol_core::constraint::{Constrained, Constraint, ConstraintError, NonNegative, StrictlyPositive};
use heliocol_model::PrimaryConditions;

/// One plasma parcel to integrate.
///
/// The primary ion's density, speed, and temperature, and the secondary
/// ion's density and temperature, are all specified at the reference radius;
/// the prediction is evaluated at the start radius.
///
/// Inputs are unit-safe quantities and may be given in any convertible unit;
/// the solver converts them once to the model's natural unit system (au,
/// cm⁻³, km/s, K) before marching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Position `r_0` where the temperature ratio is predicted.
    pub start_radius: Length,
    /// Position `r_n` where all plasma conditions are specified.
    pub reference_radius: Length,
    /// Primary ion number density `n_1` at the reference radius.
    pub primary_density: VolumetricNumberDensity,
    /// Secondary ion number density `n_2`, held fixed during the march.
    pub secondary_density: VolumetricNumberDensity,
    /// Primary ion bulk speed `v_1` at the reference radius.
    pub primary_speed: Velocity,
    /// Primary ion temperature `T_1` at the reference radius.
    pub primary_temperature: ThermodynamicTemperature,
    /// Secondary ion temperature `T_2`, held fixed during the march.
    pub secondary_temperature: ThermodynamicTemperature,
}

/// Scenario values converted to the model's natural unit system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NaturalScenario {
    /// `r_0` in au.
    pub start_radius: f64,
    /// `r_n` in au.
    pub reference_radius: f64,
    /// Primary ion conditions at the reference radius.
    pub primary: PrimaryConditions,
    /// `n_2` in cm⁻³.
    pub secondary_density: f64,
    /// `T_2` in kelvin.
    pub secondary_temperature: f64,
}

impl Scenario {
    pub(crate) fn to_natural(self) -> NaturalScenario {
        NaturalScenario {
            start_radius: self.start_radius.get::<astronomical_unit>(),
            reference_radius: self.reference_radius.get::<astronomical_unit>(),
            primary: PrimaryConditions::new(
                self.primary_density.get::<per_cubic_centimeter>(),
                self.primary_speed.get::<kilometer_per_second>(),
                self.primary_temperature.get::<kelvin>(),
            ),
            secondary_density: self.secondary_density.get::<per_cubic_centimeter>(),
            secondary_temperature: self.secondary_temperature.get::<kelvin>(),
        }
    }

    /// Checks the physical invariants: radii strictly positive; densities,
    /// speed, and temperatures non-negative.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), InputError> {
        let natural = self.to_natural();

        check::<StrictlyPositive>("start_radius", natural.start_radius)?;
        check::<StrictlyPositive>("reference_radius", natural.reference_radius)?;
        check::<NonNegative>("primary_density", natural.primary.density)?;
        check::<NonNegative>("secondary_density", natural.secondary_density)?;
        check::<NonNegative>("primary_speed", natural.primary.speed)?;
        check::<NonNegative>("primary_temperature", natural.primary.temperature)?;
        check::<NonNegative>("secondary_temperature", natural.secondary_temperature)?;

        Ok(())
    }
}

fn check<C: Constraint<f64>>(field: &'static str, value: f64) -> Result<(), InputError> {
    Constrained::<f64, C>::new(value)
        .map(|_| ())
        .map_err(|source| InputError { field, source })
}

/// A physical invariant violated by a scenario field.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid `{field}`: {source}")]
pub struct InputError {
    /// The offending scenario field.
    pub field: &'static str,
    #[source]
    pub source: ConstraintError,
}

/// A batch of independent scenarios, one per index.
///
/// This mirrors the array-like form of the published interface: each field
/// holds one value per scenario, and all fields must be the same length.
/// Lengths are checked before any integration runs, so a mismatched batch
/// never produces partial results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBatch {
    pub start_radius: Vec<Length>,
    pub reference_radius: Vec<Length>,
    pub primary_density: Vec<VolumetricNumberDensity>,
    pub secondary_density: Vec<VolumetricNumberDensity>,
    pub primary_speed: Vec<Velocity>,
    pub primary_temperature: Vec<ThermodynamicTemperature>,
    pub secondary_temperature: Vec<ThermodynamicTemperature>,
}

impl ScenarioBatch {
    /// The number of scenarios, taken from the `start_radius` field.
    ///
    /// Only meaningful once [`scenarios`](Self::scenarios) has confirmed the
    /// fields agree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.start_radius.len()
    }

    /// Whether the batch holds no scenarios.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_radius.is_empty()
    }

    /// Splits the batch into per-index scenarios.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::UnequalLengths`] if the fields disagree on the
    /// number of scenarios.
    pub fn scenarios(&self) -> Result<Vec<Scenario>, BatchError> {
        let lengths = [
            ("start_radius", self.start_radius.len()),
            ("reference_radius", self.reference_radius.len()),
            ("primary_density", self.primary_density.len()),
            ("secondary_density", self.secondary_density.len()),
            ("primary_speed", self.primary_speed.len()),
            ("primary_temperature", self.primary_temperature.len()),
            ("secondary_temperature", self.secondary_temperature.len()),
        ];

        let expected = lengths[0].1;
        if lengths.iter().any(|&(_, len)| len != expected) {
            let summary = lengths
                .iter()
                .map(|&(name, len)| format!("{name}: {len}"))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(BatchError::UnequalLengths { lengths: summary });
        }

        Ok((0..expected)
            .map(|i| Scenario {
                start_radius: self.start_radius[i],
                reference_radius: self.reference_radius[i],
                primary_density: self.primary_density[i],
                secondary_density: self.secondary_density[i],
                primary_speed: self.primary_speed[i],
                primary_temperature: self.primary_temperature[i],
                secondary_temperature: self.secondary_temperature[i],
            })
            .collect())
    }
}

/// A malformed scenario batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BatchError {
    #[error(
        "scenario fields are of unequal lengths ({lengths}); \
         all per-scenario inputs must have one value per scenario"
    )]
    UnequalLengths { lengths: String },
}

/// The input shape accepted by the solver entry point.
///
/// The scalar-vs-array dispatch of the published interface is resolved once,
/// here at the boundary; the integrator itself only ever sees a single
/// [`Scenario`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScenarioInput {
    /// One scenario, yielding one ratio.
    Single(Scenario),
    /// Independent scenarios, yielding one ratio each, in order.
    Batch(ScenarioBatch),
}

impl From<Scenario> for ScenarioInput {
    fn from(scenario: Scenario) -> Self {
        Self::Single(scenario)
    }
}

impl From<ScenarioBatch> for ScenarioInput {
    fn from(batch: ScenarioBatch) -> Self {
        Self::Batch(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Scenario {
        Scenario {
            start_radius: Length::new::<astronomical_unit>(0.1),
            reference_radius: Length::new::<astronomical_unit>(1.0),
            primary_density: VolumetricNumberDensity::new::<per_cubic_centimeter>(1200.0),
            secondary_density: VolumetricNumberDensity::new::<per_cubic_centimeter>(12.0),
            primary_speed: Velocity::new::<kilometer_per_second>(450.0),
            primary_temperature: ThermodynamicTemperature::new::<kelvin>(1.5e5),
            secondary_temperature: ThermodynamicTemperature::new::<kelvin>(2.5e6),
        }
    }

    #[test]
    fn valid_scenario_passes() {
        assert!(scenario().validate().is_ok());
    }

    #[test]
    fn zero_radius_is_rejected() {
        let mut s = scenario();
        s.reference_radius = Length::new::<astronomical_unit>(0.0);

        let err = s.validate().unwrap_err();
        assert_eq!(err.field, "reference_radius");
        assert_eq!(err.source, ConstraintError::NotPositive);
    }

    #[test]
    fn negative_density_is_rejected() {
        let mut s = scenario();
        s.secondary_density = VolumetricNumberDensity::new::<per_cubic_centimeter>(-8.0);

        let err = s.validate().unwrap_err();
        assert_eq!(err.field, "secondary_density");
        assert_eq!(err.source, ConstraintError::Negative);
    }

    #[test]
    fn natural_units_match_the_documented_convention() {
        let natural = scenario().to_natural();

        assert_eq!(natural.primary.speed, 450.0);
        assert_eq!(natural.secondary_temperature, 2.5e6);

        // These round-trip through the SI base units, so allow an ulp or two.
        approx::assert_relative_eq!(natural.start_radius, 0.1, max_relative = 1e-12);
        approx::assert_relative_eq!(natural.reference_radius, 1.0, max_relative = 1e-12);
        approx::assert_relative_eq!(natural.primary.density, 1200.0, max_relative = 1e-12);
        approx::assert_relative_eq!(natural.secondary_density, 12.0, max_relative = 1e-12);
    }

    #[test]
    fn batch_splits_into_per_index_scenarios() {
        let batch = ScenarioBatch {
            start_radius: vec![Length::new::<astronomical_unit>(0.1); 2],
            reference_radius: vec![Length::new::<astronomical_unit>(1.0); 2],
            primary_density: vec![
                VolumetricNumberDensity::new::<per_cubic_centimeter>(1200.0),
                VolumetricNumberDensity::new::<per_cubic_centimeter>(1500.0),
            ],
            secondary_density: vec![VolumetricNumberDensity::new::<per_cubic_centimeter>(12.0); 2],
            primary_speed: vec![Velocity::new::<kilometer_per_second>(450.0); 2],
            primary_temperature: vec![ThermodynamicTemperature::new::<kelvin>(1.5e5); 2],
            secondary_temperature: vec![ThermodynamicTemperature::new::<kelvin>(2.5e6); 2],
        };

        let scenarios = batch.scenarios().unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(
            scenarios[1].primary_density,
            VolumetricNumberDensity::new::<per_cubic_centimeter>(1500.0)
        );
    }

    #[test]
    fn unequal_lengths_are_reported_by_field() {
        let mut batch = ScenarioBatch {
            start_radius: vec![Length::new::<astronomical_unit>(0.1); 3],
            reference_radius: vec![Length::new::<astronomical_unit>(1.0); 3],
            primary_density: vec![VolumetricNumberDensity::new::<per_cubic_centimeter>(1200.0); 3],
            secondary_density: vec![VolumetricNumberDensity::new::<per_cubic_centimeter>(12.0); 3],
            primary_speed: vec![Velocity::new::<kilometer_per_second>(450.0); 3],
            primary_temperature: vec![ThermodynamicTemperature::new::<kelvin>(1.5e5); 3],
            secondary_temperature: vec![ThermodynamicTemperature::new::<kelvin>(2.5e6); 3],
        };
        batch.primary_speed.pop();

        let err = batch.scenarios().unwrap_err();
        let BatchError::UnequalLengths { lengths } = err;
        assert!(lengths.contains("primary_speed: 2"));
        assert!(lengths.contains("start_radius: 3"));
    }
}
