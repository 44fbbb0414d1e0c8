use thiserror::Error;

use crate::support::mach_solver::{Bracket, MachSolverError};

use super::{Domain, FlowRegime};

/// Errors that can occur while solving a flow query.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The input variable is not one the regime can be solved from.
    #[error("{regime} flow cannot be solved from `{input_var}`; expected one of {supported:?}")]
    UnknownVariable {
        regime: FlowRegime,
        input_var: String,

        /// Input variables the regime accepts.
        supported: &'static [&'static str],
    },

    /// The input value is outside the physically valid range.
    ///
    /// Also reported for a heat capacity ratio at or below one, with
    /// `input_var` set to `"gamma"`, and for a [`FlowConfig::sonic_margin`]
    /// outside `(0, 0.5)`, with `input_var` set to `"sonic_margin"`.
    ///
    /// [`FlowConfig::sonic_margin`]: super::FlowConfig::sonic_margin
    #[error("{regime} `{input_var}` = {value} is outside its domain {domain}")]
    DomainViolation {
        regime: FlowRegime,
        input_var: String,
        value: f64,
        domain: Domain,
    },

    /// No search bracket contains a root for the input value.
    #[error("{regime} `{input_var}` = {value} has no root in {brackets:?}")]
    NoRootInBracket {
        regime: FlowRegime,
        input_var: String,
        value: f64,

        /// Every bracket searched, in search order.
        brackets: Vec<Bracket>,
    },

    /// The Mach solver failed.
    #[error("{regime} `{input_var}` solve failed")]
    Solver {
        regime: FlowRegime,
        input_var: String,

        /// Underlying solver error.
        #[source]
        source: MachSolverError,
    },
}

impl FlowError {
    /// Returns the regime of the failed query.
    #[must_use]
    pub fn regime(&self) -> FlowRegime {
        match self {
            FlowError::UnknownVariable { regime, .. }
            | FlowError::DomainViolation { regime, .. }
            | FlowError::NoRootInBracket { regime, .. }
            | FlowError::Solver { regime, .. } => *regime,
        }
    }
}
