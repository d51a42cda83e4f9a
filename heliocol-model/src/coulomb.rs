use heliocol_core::IonPair;

use crate::state::PrimaryConditions;

/// Prefactor `B` of the mixed-ion Coulomb logarithm, in (cm·K)^-3/2.
pub const COULOMB_LOG_PREFACTOR: f64 = 1.0;

/// Evaluates the Coulomb logarithm `λ_21` for a mixed-ion collision.
///
/// This is the NRL formulary expression used by Maruca et al. (2013):
///
/// ```text
/// λ_21 = 9 + ln( B · √(T_1³/n_1)
///                  · (θ + μ_2/μ_1) / (Z_1 Z_2 (μ_1 + μ_2))
///                  · √(n_2 Z_2²/n_1 · Z_1² + θ) )
/// ```
///
/// The charge-weighted density term groups as `(n_2 Z_2² / n_1) · Z_1²`,
/// replicating the published reference implementation rather than the
/// typeset `n_2 Z_2² / (n_1 Z_1²)`. The two agree whenever `Z_1 = 1`, which
/// covers the proton-primary case the model was fit to.
///
/// The logarithm argument must stay strictly positive and the square-root
/// arguments non-negative; outside that domain the result is non-finite and
/// is propagated as-is.
#[must_use]
pub fn coulomb_log_mixed(
    theta: f64,
    primary: PrimaryConditions,
    secondary_density: f64,
    ions: IonPair,
) -> f64 {
    let z_1 = f64::from(ions.primary().charge_number());
    let mu_1 = ions.primary().mass_number();
    let z_2 = f64::from(ions.secondary().charge_number());
    let mu_2 = ions.secondary().mass_number();

    let thermal = (primary.temperature.powi(3) / primary.density).sqrt();
    let reduced = (theta + mu_2 / mu_1) / (z_1 * z_2 * (mu_1 + mu_2));
    let charge_weighted =
        (secondary_density * z_2.powi(2) / primary.density * z_1.powi(2) + theta).sqrt();

    9.0 + (COULOMB_LOG_PREFACTOR * thermal * reduced * charge_weighted).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn proton_alpha() -> IonPair {
        IonPair::default()
    }

    #[test]
    fn matches_hand_computed_value() {
        // Conditions at 1 au for the documented solar-wind scenario.
        let primary = PrimaryConditions::new(1200.0, 450.0, 1.5e5);
        let theta = 2.5e6 / 1.5e5;

        let lambda = coulomb_log_mixed(theta, primary, 12.0, proton_alpha());
        assert_relative_eq!(lambda, 25.46638836579236, max_relative = 1e-12);
    }

    #[test]
    fn is_slowly_varying_in_theta() {
        let primary = PrimaryConditions::new(1200.0, 450.0, 1.5e5);
        let low = coulomb_log_mixed(1.0, primary, 12.0, proton_alpha());
        let high = coulomb_log_mixed(20.0, primary, 12.0, proton_alpha());

        assert!(low > 0.0 && high > low);
        assert!(high - low < 4.0, "Coulomb log should vary slowly");
    }

    #[test]
    fn out_of_domain_inputs_produce_non_finite_values() {
        let primary = PrimaryConditions::new(-1.0, 450.0, 1.5e5);
        let lambda = coulomb_log_mixed(16.0, primary, 12.0, proton_alpha());
        assert!(!lambda.is_finite());
    }
}
