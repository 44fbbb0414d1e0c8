use thiserror::Error;
use twine_solvers::equation::bisection;

use super::Bracket;

/// Errors that can occur while inverting a relation for Mach number.
#[derive(Debug, Error)]
pub enum MachSolverError {
    /// The bracket is not a finite interval with `0 < lo < hi`.
    #[error("invalid bracket {bracket}")]
    InvalidBracket { bracket: Bracket },

    /// The relation produced a non-finite value at a bracket endpoint.
    #[error("non-finite residual {residual} at M = {mach}")]
    NonFiniteResidual { mach: f64, residual: f64 },

    /// The target is not reached anywhere in the bracket.
    #[error("no sign change over {bracket}: residuals={residuals:?}")]
    NoSignChange {
        bracket: Bracket,

        /// Residuals at the lower and upper endpoints.
        residuals: [f64; 2],
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
