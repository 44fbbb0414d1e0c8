//! Compressible flow models.
//!
//! Recovers the Mach number(s) consistent with one known dimensionless ratio
//! of isentropic, normal shock, Fanno, or Rayleigh flow, and reports every
//! other ratio of that flow state. The computational core is in the internal
//! `core` module; [`CompressibleFlow`] adapts it to [`twine_core::Model`].
//!
//! # Example
//!
//! ```
//! use twine_compressible::models::gas_dynamics::{FlowRegime, MachBranch, solve};
//!
//! let result = solve(FlowRegime::Isentropic, "A_Astar", 1.6875, 1.4).unwrap();
//!
//! let supersonic = result.branch(MachBranch::Supersonic).unwrap();
//! assert!((supersonic.mach() - 2.0).abs() < 1e-9);
//! assert!(result.contains(MachBranch::Subsonic));
//! ```

mod core;

pub use self::core::{
    Domain, FlowConfig, FlowError, FlowQuery, FlowRegime, Limit, MachBranch, MaxMach,
    ParseRegimeError, RatioSet, SolverResult, ratios_at, solve_query,
};

use rayon::prelude::*;
use twine_core::Model;

use crate::support::gas::GasProperties;

/// Solves one flow state with the default configuration.
///
/// # Errors
///
/// Returns [`FlowError::DomainViolation`] on `input_var = "gamma"` if `gamma`
/// is not a finite number above one, or any error of [`solve_query`].
pub fn solve(
    regime: FlowRegime,
    input_var: &str,
    input_val: f64,
    gamma: f64,
) -> Result<SolverResult, FlowError> {
    let gas = GasProperties::new(gamma).map_err(|_| FlowError::DomainViolation {
        regime,
        input_var: "gamma".to_owned(),
        value: gamma,
        domain: Domain::above(1.0),
    })?;

    let query = FlowQuery::new(regime, input_var, input_val).with_gas(gas);
    solve_query(&query, &FlowConfig::default())
}

/// Solves independent queries in parallel.
///
/// Results are returned in query order.
pub fn solve_batch(
    queries: &[FlowQuery],
    config: &FlowConfig,
) -> Vec<Result<SolverResult, FlowError>> {
    queries
        .par_iter()
        .map(|query| solve_query(query, config))
        .collect()
}

/// A [`twine_core::Model`] that solves flow queries.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompressibleFlow {
    config: FlowConfig,
}

impl CompressibleFlow {
    #[must_use]
    pub fn new(config: FlowConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }
}

impl Model for CompressibleFlow {
    type Input = FlowQuery;
    type Output = SolverResult;
    type Error = FlowError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve_query(input, &self.config)
    }
}
