//! The collisional thermalization model of Maruca et al. (2013).
//!
//! This crate holds the stateless physics evaluated at each step of the
//! radial march: the power-law scaling of the primary ion's profiles, the
//! Coulomb logarithm for a mixed-ion collision (NRL formulary form), and the
//! radial derivative of the ion temperature ratio `θ = T_2 / T_1`.
//!
//! All functions work on plain `f64` values in the model's natural unit
//! system: radii in astronomical units, number densities in cm⁻³, speeds in
//! km/s, and temperatures in kelvin. The solver converts unit-safe inputs to
//! this system once, at the integration boundary. The empirical constants
//! only make sense in these units, and the fractional powers in the
//! formulation cannot be expressed dimensionally.
//!
//! None of these functions validate their inputs or guard the domains of the
//! logarithm and square roots. Out-of-domain inputs produce non-finite values
//! that propagate to the caller, which treats them as "model invalid for
//! these inputs".

mod coulomb;
mod relaxation;
mod scaling;
mod state;

pub use coulomb::{COULOMB_LOG_PREFACTOR, coulomb_log_mixed};
pub use relaxation::{THERMALIZATION_RATE_COEFFICIENT, temperature_ratio_derivative};
pub use scaling::{RadialScaling, radial_scale};
pub use state::PrimaryConditions;
