use crate::support::gas::GasProperties;

use super::FlowRegime;

/// A request to solve one flow state from one known ratio.
///
/// The gas defaults to air; use [`FlowQuery::with_gas`] for another.
///
/// # Example
///
/// ```
/// use twine_compressible::{
///     models::gas_dynamics::{FlowQuery, FlowRegime},
///     support::gas::GasProperties,
/// };
///
/// let query = FlowQuery::new(FlowRegime::Fanno, "cfLstar_D", 0.3)
///     .with_gas(GasProperties::new(1.3).unwrap());
///
/// assert_eq!(query.input_var(), "cfLstar_D");
/// assert_eq!(query.gas().gamma(), 1.3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FlowQuery {
    regime: FlowRegime,
    input_var: String,
    input_val: f64,
    gas: GasProperties,
}

impl FlowQuery {
    /// Creates a query for air.
    pub fn new(regime: FlowRegime, input_var: impl Into<String>, input_val: f64) -> Self {
        Self {
            regime,
            input_var: input_var.into(),
            input_val,
            gas: GasProperties::air(),
        }
    }

    /// Replaces the gas.
    #[must_use]
    pub fn with_gas(self, gas: GasProperties) -> Self {
        Self { gas, ..self }
    }

    #[must_use]
    pub fn regime(&self) -> FlowRegime {
        self.regime
    }

    /// Name of the known ratio, such as `"P_Pstar"` or `"M"`.
    #[must_use]
    pub fn input_var(&self) -> &str {
        &self.input_var
    }

    /// Value of the known ratio.
    #[must_use]
    pub fn input_val(&self) -> f64 {
        self.input_val
    }

    #[must_use]
    pub fn gas(&self) -> GasProperties {
        self.gas
    }
}
