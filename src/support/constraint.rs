//! Numeric constraints checked once, at construction.
//!
//! Hydraulic inputs have simple physical ranges: a discharge is strictly
//! positive, a wall roughness can be zero but never negative. Wrapping such a
//! value in [`Constrained<T, C>`] records that the check already happened, so
//! the solvers downstream can use the value without re-validating it.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: greater than zero
//! - [`NonNegative`]: zero or greater
//!
//! Both work with plain numbers and with [`uom`] quantities, since the check
//! only needs [`PartialOrd`] and [`num_traits::Zero`].
//!
//! # Extending
//!
//! Implement [`Constraint<T>`] on a zero-sized marker type to add a new range.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A numeric range check implemented by a marker type.
pub trait Constraint<T> {
    /// Checks that `value` lies in the range described by this marker.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing how the value falls outside.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Reason a value was rejected by a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    /// The value is below zero.
    #[error("value must not be negative")]
    Negative,
    /// The value is zero where it must be nonzero.
    #[error("value must not be zero")]
    Zero,
    /// The value is `NaN`.
    #[error("value is not a number")]
    NotANumber,
    /// The value is at or below the lower limit.
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    /// The value is at or above the upper limit.
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// Result alias for fallible constrained construction.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that has passed the constraint `C`.
///
/// # Example
///
/// ```
/// use gvf_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::VolumeRate, volume_rate::cubic_meter_per_second};
///
/// let q = Constrained::<_, StrictlyPositive>::new(
///     VolumeRate::new::<cubic_meter_per_second>(0.3),
/// )
/// .unwrap();
/// assert_eq!(q.into_inner().get::<cubic_meter_per_second>(), 0.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Unwraps the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
