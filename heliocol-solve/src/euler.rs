//! The fixed-step forward Euler march.
//!
//! The governing equation has no closed-form solution, and the published
//! model specifies this exact discretization: a fixed number of equal radial
//! sub-steps with the derivative evaluated explicitly at each one. The step
//! count is an accuracy/performance knob, not an adaptive-error target;
//! reproducing the published values requires exactly this scheme.

use serde::{Deserialize, Serialize};

use heliocol_core::IonPair;
use heliocol_model::{RadialScaling, coulomb_log_mixed, temperature_ratio_derivative};

use crate::scenario::Scenario;

/// Configuration for the thermalization march.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of equal radial sub-steps.
    pub n_step: usize,
    /// Power-law exponents applied to the primary ion's profiles.
    pub scaling: RadialScaling,
}

/// The published defaults: 100 steps and the Hellinger et al. (2011)
/// solar-wind exponents.
impl Default for Config {
    fn default() -> Self {
        Self {
            n_step: 100,
            scaling: RadialScaling::default(),
        }
    }
}

impl Config {
    /// Validates the step count and the scaling exponents.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending setting.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.n_step == 0 {
            return Err("n_step must be at least 1");
        }
        self.scaling.validate()
    }
}

/// Marches the temperature ratio `θ = T_2/T_1` from the reference radius to
/// the start radius and returns the final dimensionless value.
///
/// The step size is `d_r = (r_0 − r_n) / n_step`, and the model is evaluated
/// at `r = r_n + (i + 1)·d_r` for each step `i`, so the last evaluation
/// lands on `r_0`. At each radius the primary ion's conditions are scaled,
/// the instantaneous ratio is re-anchored to the scaled primary temperature,
/// and one explicit Euler increment is applied. The re-anchoring before the
/// increment follows the published reference implementation; it is what
/// reproduces the published example values.
///
/// This function performs no validation (callers validate the scenario and
/// config first) and never fails: inputs outside the model's domain surface
/// as a non-finite result, meaning "model invalid for these inputs" rather
/// than a defect. The march always runs exactly `n_step` iterations.
#[must_use]
pub fn integrate(scenario: &Scenario, ions: IonPair, config: &Config) -> f64 {
    let s = scenario.to_natural();
    let d_r = (s.start_radius - s.reference_radius) / config.n_step as f64;

    let mut theta = s.secondary_temperature / s.primary.temperature;

    for i in 0..config.n_step {
        let r = s.reference_radius + (i + 1) as f64 * d_r;
        let primary = config
            .scaling
            .conditions_at(s.primary, r, s.reference_radius);

        theta = s.secondary_temperature / primary.temperature;

        let lambda = coulomb_log_mixed(theta, primary, s.secondary_density, ions);
        let d_theta = temperature_ratio_derivative(theta, primary, s.secondary_density, ions, lambda);

        theta += d_r * d_theta;
    }

    theta
}
