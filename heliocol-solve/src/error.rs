use thiserror::Error;

use heliocol_core::SpeciesError;

use crate::scenario::{BatchError, InputError};

/// Errors from the thermalization entry point.
///
/// All variants are raised before any integration runs; the march itself
/// never fails (domain violations surface as non-finite results instead).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error(transparent)]
    Species(#[from] SpeciesError),
}
