//! Fixed-step Euler solver for collisional thermalization of solar-wind
//! plasma.
//!
//! Given the conditions of a two-ion plasma parcel at a reference radius,
//! [`thermalization_ratio`] predicts the ion temperature ratio
//! `θ = T_2 / T_1` at another radius by integrating the collisional
//! relaxation equation of Maruca et al. (2013) with a forward Euler march
//! (see [`heliocol_model`] for the physics).
//!
//! Inputs are validated here, at the boundary: scenario invariants, batch
//! shape, and config settings are all checked before the first step runs.
//! The march itself is pure arithmetic and reports model-domain violations
//! as non-finite ratios rather than errors.
//!
//! # Example
//!
//! ```
//! use heliocol_core::IonPair;
//! use heliocol_solve::{Config, Output, Scenario, ScenarioInput, thermalization_ratio};
//! use uom::si::{
//!     f64::{Length, ThermodynamicTemperature, Velocity, VolumetricNumberDensity},
//!     length::astronomical_unit,
//!     thermodynamic_temperature::kelvin,
//!     velocity::kilometer_per_second,
//!     volumetric_number_density::per_cubic_centimeter,
//! };
//!
//! let scenario = Scenario {
//!     start_radius: Length::new::<astronomical_unit>(0.1),
//!     reference_radius: Length::new::<astronomical_unit>(1.0),
//!     primary_density: VolumetricNumberDensity::new::<per_cubic_centimeter>(1200.0),
//!     secondary_density: VolumetricNumberDensity::new::<per_cubic_centimeter>(12.0),
//!     primary_speed: Velocity::new::<kilometer_per_second>(450.0),
//!     primary_temperature: ThermodynamicTemperature::new::<kelvin>(1.5e5),
//!     secondary_temperature: ThermodynamicTemperature::new::<kelvin>(2.5e6),
//! };
//!
//! let output = thermalization_ratio(
//!     &ScenarioInput::Single(scenario),
//!     IonPair::default(),
//!     &Config::default(),
//! )?;
//!
//! let Output::Single(theta) = output else { unreachable!() };
//! assert!((theta - 3.3806).abs() < 1e-3);
//! # Ok::<(), heliocol_solve::Error>(())
//! ```

mod error;

pub mod euler;
pub mod scenario;

pub use error::Error;
pub use euler::Config;
pub use scenario::{BatchError, InputError, Scenario, ScenarioBatch, ScenarioInput};

use heliocol_core::IonPair;

/// Predicted temperature ratios, shaped like the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// The ratio for a single scenario.
    Single(f64),
    /// One ratio per batch scenario, index-aligned with the inputs.
    Batch(Vec<f64>),
}

impl Output {
    /// The ratios as a vector, regardless of input shape.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        match self {
            Self::Single(theta) => vec![theta],
            Self::Batch(thetas) => thetas,
        }
    }
}

/// Predicts the ion temperature ratio for one scenario or a batch.
///
/// Batches are processed sequentially in input order, so results align
/// index-for-index with the inputs and repeated runs are deterministic.
/// Every scenario is validated before the first one is integrated; a
/// malformed batch therefore produces no partial results.
///
/// # Errors
///
/// Returns an error if the config is invalid, a scenario violates a
/// physical invariant, or the batch fields have unequal lengths.
pub fn thermalization_ratio(
    input: &ScenarioInput,
    ions: IonPair,
    config: &Config,
) -> Result<Output, Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    match input {
        ScenarioInput::Single(scenario) => {
            scenario.validate()?;
            Ok(Output::Single(euler::integrate(scenario, ions, config)))
        }
        ScenarioInput::Batch(batch) => {
            let scenarios = batch.scenarios()?;
            for scenario in &scenarios {
                scenario.validate()?;
            }
            Ok(Output::Batch(
                scenarios
                    .iter()
                    .map(|scenario| euler::integrate(scenario, ions, config))
                    .collect(),
            ))
        }
    }
}
