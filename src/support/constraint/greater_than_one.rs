use std::cmp::Ordering;

use num_traits::One;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly greater than one.
///
/// The heat capacity ratio of any real gas satisfies this bound, and so do
/// several flow ratios whose minimum sits at the sonic point (for example the
/// isentropic area ratio `A/A*`).
///
/// # Examples
///
/// ```
/// use twine_compressible::support::constraint::GreaterThanOne;
///
/// let gamma = GreaterThanOne::new(1.4).unwrap();
/// assert_eq!(gamma.into_inner(), 1.4);
///
/// assert!(GreaterThanOne::new(1.0).is_err());
/// assert!(GreaterThanOne::new(0.5).is_err());
/// assert!(GreaterThanOne::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GreaterThanOne;

impl GreaterThanOne {
    /// Constructs a [`Constrained<T, GreaterThanOne>`] if the value exceeds one.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is less than or equal to one, or not a number (`NaN`).
    pub fn new<T: PartialOrd + One>(
        value: T,
    ) -> Result<Constrained<T, GreaterThanOne>, ConstraintError> {
        Constrained::<T, GreaterThanOne>::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for GreaterThanOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal | Ordering::Less) => Err(ConstraintError::NotAboveOne),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
