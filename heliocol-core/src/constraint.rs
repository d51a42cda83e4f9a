//! Numeric constraints checked at construction time.
//!
//! A [`Constrained<T, C>`] wraps a value of type `T` together with a marker
//! type `C` naming the invariant it satisfies. The invariant is verified once,
//! when the wrapper is built, and holds for the lifetime of the value.
//!
//! Two markers cover the invariants the solver relies on:
//!
//! - [`NonNegative`]: zero or greater
//! - [`StrictlyPositive`]: greater than zero
//!
//! Both reject values that cannot be ordered against zero (such as a floating
//! point NaN) with [`ConstraintError::NotANumber`].

use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;
use thiserror::Error;

/// A trait for enforcing a numeric invariant at construction time.
///
/// Implement this for a zero-sized marker type to define a custom constraint.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must be greater than zero")]
    NotPositive,
    #[error("value is not a number")]
    NotANumber,
}

/// A value of type `T` known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use heliocol_core::constraint::{Constrained, StrictlyPositive};
///
/// let radius = Constrained::<f64, StrictlyPositive>::new(0.1).unwrap();
/// assert_eq!(radius.into_inner(), 0.1);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Marker for values that are zero or greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonNegative;

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            Some(_) => Ok(()),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker for values that are strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictlyPositive;

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(_) => Err(ConstraintError::NotPositive),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_accepts_zero_and_positive() {
        assert!(Constrained::<f64, NonNegative>::new(0.0).is_ok());
        assert!(Constrained::<f64, NonNegative>::new(1.5e5).is_ok());
        assert!(Constrained::<i32, NonNegative>::new(7).is_ok());
    }

    #[test]
    fn non_negative_rejects_negative_and_nan() {
        assert_eq!(
            Constrained::<f64, NonNegative>::new(-1.0).unwrap_err(),
            ConstraintError::Negative
        );
        assert_eq!(
            Constrained::<f64, NonNegative>::new(f64::NAN).unwrap_err(),
            ConstraintError::NotANumber
        );
    }

    #[test]
    fn strictly_positive_rejects_zero() {
        assert!(Constrained::<f64, StrictlyPositive>::new(0.1).is_ok());
        assert_eq!(
            Constrained::<f64, StrictlyPositive>::new(0.0).unwrap_err(),
            ConstraintError::NotPositive
        );
        assert_eq!(
            Constrained::<f64, StrictlyPositive>::new(-0.1).unwrap_err(),
            ConstraintError::NotPositive
        );
    }

    #[test]
    fn inner_value_is_preserved() {
        let n = Constrained::<f64, StrictlyPositive>::new(450.0).unwrap();
        assert_eq!(n.as_ref(), &450.0);
        assert_eq!(n.into_inner(), 450.0);
    }
}
