/// Bulk conditions of the primary ion at one radial position.
///
/// Values are in the model's natural unit system: density in cm⁻³, speed in
/// km/s, temperature in kelvin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimaryConditions {
    /// Number density `n_1`, in cm⁻³.
    pub density: f64,
    /// Bulk speed `v_1`, in km/s.
    pub speed: f64,
    /// Scalar temperature `T_1`, in kelvin.
    pub temperature: f64,
}

impl PrimaryConditions {
    /// Creates the conditions from density, speed, and temperature.
    #[must_use]
    pub fn new(density: f64, speed: f64, temperature: f64) -> Self {
        Self {
            density,
            speed,
            temperature,
        }
    }
}
