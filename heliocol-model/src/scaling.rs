use serde::{Deserialize, Serialize};

use crate::state::PrimaryConditions;

/// Applies the radial power law `value(r) = value(r_ref) * (r / r_ref)^exponent`.
///
/// # Example
///
/// ```
/// use heliocol_model::radial_scale;
///
/// // An exponent of -1 halves the value when the radius doubles.
/// let scaled = radial_scale(100.0, 2.0, 1.0, -1.0);
/// assert_eq!(scaled, 50.0);
/// ```
#[must_use]
pub fn radial_scale(value_at_reference: f64, r: f64, r_reference: f64, exponent: f64) -> f64 {
    value_at_reference * (r / r_reference).powf(exponent)
}

/// Power-law exponents for the primary ion's radial profiles.
///
/// Only the primary ion is scaled with radius; the secondary ion's density
/// and temperature are held at their reference values throughout the march.
/// This asymmetry is part of the published model: only the dominant species'
/// radial profile is empirically characterized.
///
/// The defaults are the solar-wind fits of Hellinger et al. (2011):
/// `n ∝ r^-1.8`, `v ∝ r^-0.2`, `T ∝ r^-0.74`. Exponents of either sign are
/// physically meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialScaling {
    /// Exponent for the primary ion number density.
    pub density: f64,
    /// Exponent for the primary ion bulk speed.
    pub velocity: f64,
    /// Exponent for the primary ion temperature.
    pub temperature: f64,
}

impl Default for RadialScaling {
    fn default() -> Self {
        Self {
            density: -1.8,
            velocity: -0.2,
            temperature: -0.74,
        }
    }
}

impl RadialScaling {
    /// Validates that all exponents are finite.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending exponent.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.density.is_finite() {
            return Err("density exponent must be finite");
        }
        if !self.velocity.is_finite() {
            return Err("velocity exponent must be finite");
        }
        if !self.temperature.is_finite() {
            return Err("temperature exponent must be finite");
        }
        Ok(())
    }

    /// Scales reference conditions out to the radius `r`.
    ///
    /// Both radii must be in the same unit (the solver uses astronomical
    /// units).
    #[must_use]
    pub fn conditions_at(
        &self,
        reference: PrimaryConditions,
        r: f64,
        r_reference: f64,
    ) -> PrimaryConditions {
        PrimaryConditions {
            density: radial_scale(reference.density, r, r_reference, self.density),
            speed: radial_scale(reference.speed, r, r_reference, self.velocity),
            temperature: radial_scale(reference.temperature, r, r_reference, self.temperature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn zero_exponent_leaves_value_unchanged() {
        assert_eq!(radial_scale(1200.0, 0.3, 1.0, 0.0), 1200.0);
    }

    #[test]
    fn reference_radius_is_identity() {
        assert_eq!(radial_scale(450.0, 1.0, 1.0, -0.2), 450.0);
    }

    #[test]
    fn matches_hand_computed_power_law() {
        // 1200 * (0.5)^-1.8
        assert_relative_eq!(
            radial_scale(1200.0, 0.5, 1.0, -1.8),
            4178.642703821396,
            max_relative = 1e-12
        );
    }

    #[test]
    fn conditions_scale_each_profile_with_its_own_exponent() {
        let reference = PrimaryConditions::new(1200.0, 450.0, 1.5e5);
        let scaling = RadialScaling::default();

        let scaled = scaling.conditions_at(reference, 0.5, 1.0);

        assert_relative_eq!(scaled.density, 1200.0 * 0.5_f64.powf(-1.8));
        assert_relative_eq!(scaled.speed, 450.0 * 0.5_f64.powf(-0.2));
        assert_relative_eq!(scaled.temperature, 1.5e5 * 0.5_f64.powf(-0.74));
    }

    #[test]
    fn validate_rejects_non_finite_exponents() {
        let mut scaling = RadialScaling::default();
        assert!(scaling.validate().is_ok());

        scaling.velocity = f64::NAN;
        assert!(scaling.validate().is_err());
    }
}
