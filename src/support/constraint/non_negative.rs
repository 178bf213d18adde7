use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values that are zero or greater.
///
/// Used for the Darcy-Weisbach wall roughness, where zero describes a
/// hydraulically smooth wall.
///
/// # Examples
///
/// ```
/// use gvf_models::support::constraint::NonNegative;
/// use uom::si::{f64::Length, length::millimeter};
///
/// assert!(NonNegative::new(Length::new::<millimeter>(0.0)).is_ok());
/// assert!(NonNegative::new(Length::new::<millimeter>(1.5)).is_ok());
/// assert!(NonNegative::new(Length::new::<millimeter>(-1.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonNegative;

impl NonNegative {
    /// Wraps `value` if it is zero or greater.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
