//! Foundational types for the heliocol workspace.
//!
//! This crate provides the building blocks shared by the physical model and
//! the solver:
//!
//! - [`constraint`]: type-level numeric constraints checked once at
//!   construction, so downstream code can trust its inputs.
//! - [`species`]: resolution of ion species into the charge and mass numbers
//!   the collisional model consumes.

pub mod constraint;
pub mod species;

pub use constraint::{Constrained, Constraint, ConstraintError, NonNegative, StrictlyPositive};
pub use species::{Ion, IonPair, SpeciesError};
