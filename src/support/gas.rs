//! Calorically perfect gas properties for compressible flow relations.

use crate::support::constraint::{Constrained, ConstraintError, ConstraintResult, GreaterThanOne};

/// Heat capacity ratio of dry air.
pub const AIR_GAMMA: f64 = 1.4;

/// Properties of a calorically perfect gas.
///
/// The closed-form relations only need the heat capacity ratio
/// `gamma = cp / cv`, which must be finite and greater than one.
///
/// # Example
///
/// ```
/// use twine_compressible::support::gas::GasProperties;
///
/// let helium = GasProperties::new(5.0 / 3.0).unwrap();
/// assert!(helium.gamma() > 1.6);
///
/// assert!(GasProperties::new(1.0).is_err());
/// assert_eq!(GasProperties::default().gamma(), 1.4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    gamma: Constrained<f64, GreaterThanOne>,
}

impl GasProperties {
    /// Creates gas properties from a heat capacity ratio.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `gamma` is not a finite number greater than one.
    pub fn new(gamma: f64) -> ConstraintResult<Self> {
        if gamma.is_infinite() {
            return Err(ConstraintError::NotFinite);
        }
        Ok(Self {
            gamma: GreaterThanOne::new(gamma)?,
        })
    }

    /// Dry air, `gamma = 1.4`.
    #[must_use]
    pub fn air() -> Self {
        Self {
            gamma: Constrained::new_unchecked(AIR_GAMMA),
        }
    }

    /// Returns the heat capacity ratio.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        *self.gamma.as_ref()
    }
}

impl Default for GasProperties {
    fn default() -> Self {
        Self::air()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_physical_gamma() {
        assert_eq!(GasProperties::new(1.0), Err(ConstraintError::NotAboveOne));
        assert_eq!(GasProperties::new(0.7), Err(ConstraintError::NotAboveOne));
        assert_eq!(
            GasProperties::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
        assert_eq!(
            GasProperties::new(f64::INFINITY),
            Err(ConstraintError::NotFinite)
        );
    }

    #[test]
    fn air_is_default() {
        assert_eq!(GasProperties::default(), GasProperties::air());
        assert_eq!(GasProperties::air().gamma(), AIR_GAMMA);
    }
}
