use heliocol_core::IonPair;

use crate::state::PrimaryConditions;

/// Empirical rate coefficient `A` of Maruca et al. (2013), in
/// cm³·km·K^3/2·s⁻¹·au⁻¹.
pub const THERMALIZATION_RATE_COEFFICIENT: f64 = 2.6e7;

/// Evaluates the radial derivative `dθ/dr` of the temperature ratio.
///
/// ```text
/// dθ/dr = A · n_1/(v_1 T_1^3/2)
///           · √(μ_1 μ_2) Z_1 Z_2 (1 − θ)(1 + η θ) / (μ_2/μ_1 + θ)^3/2
///           · λ_21
/// ```
///
/// with `η = n_2/n_1` and `λ_21` the mixed-ion Coulomb logarithm, evaluated
/// by the caller at the same `θ`. The result is in au⁻¹.
///
/// The derivative vanishes at `θ = 1` (equal temperatures) and changes sign
/// there, which is what drives the ratio toward thermal equilibrium.
#[must_use]
pub fn temperature_ratio_derivative(
    theta: f64,
    primary: PrimaryConditions,
    secondary_density: f64,
    ions: IonPair,
    coulomb_log: f64,
) -> f64 {
    let z_1 = f64::from(ions.primary().charge_number());
    let mu_1 = ions.primary().mass_number();
    let z_2 = f64::from(ions.secondary().charge_number());
    let mu_2 = ions.secondary().mass_number();

    let eta = secondary_density / primary.density;
    let collision = primary.density / (primary.speed * primary.temperature.powf(1.5));
    let coupling = (mu_1 * mu_2).sqrt() * z_1 * z_2 * (1.0 - theta) * (1.0 + eta * theta)
        / (mu_2 / mu_1 + theta).powf(1.5);

    THERMALIZATION_RATE_COEFFICIENT * collision * coupling * coulomb_log
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::coulomb::coulomb_log_mixed;

    fn proton_alpha() -> IonPair {
        IonPair::default()
    }

    #[test]
    fn matches_hand_computed_value() {
        let primary = PrimaryConditions::new(1200.0, 450.0, 1.5e5);
        let theta = 2.5e6 / 1.5e5;

        let lambda = coulomb_log_mixed(theta, primary, 12.0, proton_alpha());
        let derivative =
            temperature_ratio_derivative(theta, primary, 12.0, proton_alpha(), lambda);

        assert_relative_eq!(derivative, -23.65104211918677, max_relative = 1e-12);
    }

    #[test]
    fn vanishes_at_equal_temperatures() {
        let primary = PrimaryConditions::new(1200.0, 450.0, 1.5e5);
        let derivative = temperature_ratio_derivative(1.0, primary, 12.0, proton_alpha(), 20.0);
        assert_eq!(derivative, 0.0);
    }

    #[test]
    fn drives_the_ratio_toward_equilibrium() {
        let primary = PrimaryConditions::new(1200.0, 450.0, 1.5e5);
        let lambda = 20.0;

        // A hotter secondary relaxes downward, a cooler one upward.
        let hot = temperature_ratio_derivative(4.0, primary, 12.0, proton_alpha(), lambda);
        let cold = temperature_ratio_derivative(0.25, primary, 12.0, proton_alpha(), lambda);

        assert!(hot < 0.0);
        assert!(cold > 0.0);
    }
}
