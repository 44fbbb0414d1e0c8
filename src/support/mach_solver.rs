//! Bracketed Mach number inversion.
//!
//! [`find_mach`] recovers the Mach number at which a monotonic relation
//! `f(M)` reaches a target value, given a bracket `[lo, hi]` whose endpoint
//! residuals `f(M) - target` change sign. The search itself is the
//! [`twine_solvers`] bisection solver; this module adapts a plain relation to
//! it and turns a missing sign change into a typed error instead of a guess.
//!
//! Every compressible flow ratio is only piecewise monotonic, splitting at the
//! sonic point, so callers pick the subsonic or supersonic half with
//! [`Bracket::subsonic`] and [`Bracket::supersonic`].
//!
//! # Example
//!
//! ```
//! use twine_compressible::support::{
//!     flow_relations::isentropic,
//!     mach_solver::{Bracket, MachSolverConfig, find_mach},
//! };
//!
//! let target = isentropic::area_ratio(2.5, 1.4);
//! let mach = find_mach(
//!     |m| isentropic::area_ratio(m, 1.4),
//!     target,
//!     Bracket::supersonic(1e-6, 50.0),
//!     &MachSolverConfig::default(),
//! )
//! .unwrap();
//!
//! assert!((mach - 2.5).abs() < 1e-9);
//! ```

mod config;
mod error;
mod problem;

use std::fmt;

pub use config::MachSolverConfig;
pub use error::MachSolverError;

use tracing::trace;
use twine_solvers::equation::bisection;

use crate::support::constraint::StrictlyPositive;

use problem::{RatioModel, RatioProblem};

/// A Mach number interval searched for a single root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub lo: f64,
    pub hi: f64,
}

impl Bracket {
    /// Creates a bracket from its endpoints.
    #[must_use]
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// The subsonic half-domain `(margin, 1 - margin)`.
    #[must_use]
    pub fn subsonic(margin: f64) -> Self {
        Self::new(margin, 1.0 - margin)
    }

    /// The supersonic half-domain `(1 + margin, max_mach)`.
    #[must_use]
    pub fn supersonic(margin: f64, max_mach: f64) -> Self {
        Self::new(1.0 + margin, max_mach)
    }

    /// Returns `true` if `mach` lies within the closed bracket.
    #[must_use]
    pub fn contains(&self, mach: f64) -> bool {
        self.lo <= mach && mach <= self.hi
    }

    fn is_valid(&self) -> bool {
        StrictlyPositive::new(self.lo).is_ok() && self.lo < self.hi && self.hi.is_finite()
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Finds the Mach number in `bracket` where `relation` equals `target`.
///
/// The relation must be monotonic on the bracket, so the root, if any, is
/// unique. An endpoint that hits the target exactly is returned as is.
///
/// # Errors
///
/// - [`MachSolverError::InvalidBracket`] if the bracket is not `0 < lo < hi`.
/// - [`MachSolverError::NonFiniteResidual`] if an endpoint evaluates to a
///   non-finite residual.
/// - [`MachSolverError::NoSignChange`] if the endpoint residuals share a sign,
///   meaning the target is out of the relation's range on this bracket.
/// - [`MachSolverError::MaxIters`] if bisection hits its iteration limit.
/// - [`MachSolverError::Bisection`] if the bisection solver itself fails.
pub fn find_mach<F>(
    relation: F,
    target: f64,
    bracket: Bracket,
    config: &MachSolverConfig,
) -> Result<f64, MachSolverError>
where
    F: Fn(f64) -> f64,
{
    if !bracket.is_valid() {
        return Err(MachSolverError::InvalidBracket { bracket });
    }

    let residuals = [relation(bracket.lo) - target, relation(bracket.hi) - target];
    for (mach, residual) in [bracket.lo, bracket.hi].into_iter().zip(residuals) {
        if !residual.is_finite() {
            return Err(MachSolverError::NonFiniteResidual { mach, residual });
        }
        if residual == 0.0 {
            trace!(mach, target, %bracket, "root on bracket endpoint");
            return Ok(mach);
        }
    }

    if residuals[0].signum() == residuals[1].signum() {
        return Err(MachSolverError::NoSignChange { bracket, residuals });
    }

    let model = RatioModel::new(&relation);
    let problem = RatioProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [bracket.lo, bracket.hi],
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(MachSolverError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    let mach = solution.snapshot.output.mach;
    trace!(mach, target, %bracket, iters = solution.iters, "mach root found");
    Ok(mach)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::support::flow_relations::{fanno, isentropic};

    const AIR: f64 = 1.4;

    #[test]
    fn inverts_both_branches_of_area_ratio() {
        let config = MachSolverConfig::default();
        let target = 2.0;

        let sub = find_mach(
            |m| isentropic::area_ratio(m, AIR),
            target,
            Bracket::subsonic(1e-6),
            &config,
        )
        .unwrap();
        let sup = find_mach(
            |m| isentropic::area_ratio(m, AIR),
            target,
            Bracket::supersonic(1e-6, 100.0),
            &config,
        )
        .unwrap();

        assert_relative_eq!(sub, 0.305_903_834, max_relative = 1e-8);
        assert_relative_eq!(sup, 2.197_198_122, max_relative = 1e-8);
        assert_relative_eq!(isentropic::area_ratio(sub, AIR), target, max_relative = 1e-10);
        assert_relative_eq!(isentropic::area_ratio(sup, AIR), target, max_relative = 1e-10);
    }

    #[test]
    fn missing_sign_change_is_an_error() {
        // Supersonic Fanno friction never exceeds ~0.82 in air.
        let result = find_mach(
            |m| fanno::friction_parameter(m, AIR),
            2.0,
            Bracket::supersonic(1e-6, 100.0),
            &MachSolverConfig::default(),
        );

        match result {
            Err(MachSolverError::NoSignChange { bracket, residuals }) => {
                assert_eq!(bracket, Bracket::supersonic(1e-6, 100.0));
                assert!(residuals.iter().all(|r| *r < 0.0));
            }
            other => panic!("expected NoSignChange, got {other:?}"),
        }
    }

    #[test]
    fn exact_endpoint_root() {
        let mach = find_mach(
            |m| m * m,
            4.0,
            Bracket::new(2.0, 10.0),
            &MachSolverConfig::default(),
        )
        .unwrap();
        assert_eq!(mach, 2.0);
    }

    #[test]
    fn rejects_invalid_brackets() {
        let config = MachSolverConfig::default();
        for bracket in [
            Bracket::new(0.0, 1.0),
            Bracket::new(2.0, 1.0),
            Bracket::new(1.0, f64::INFINITY),
            Bracket::new(f64::NAN, 1.0),
        ] {
            assert!(matches!(
                find_mach(|m| m, 0.5, bracket, &config),
                Err(MachSolverError::InvalidBracket { .. })
            ));
        }
    }

    #[test]
    fn non_finite_endpoint_is_reported() {
        let result = find_mach(
            |m| if m > 5.0 { f64::NAN } else { m },
            2.0,
            Bracket::new(1.0, 10.0),
            &MachSolverConfig::default(),
        );
        assert!(matches!(
            result,
            Err(MachSolverError::NonFiniteResidual { mach, .. }) if mach == 10.0
        ));
    }

    #[test]
    fn iteration_limit_is_reported() {
        let config = MachSolverConfig {
            max_iters: 2,
            ..MachSolverConfig::default()
        };
        let result = find_mach(
            |m| isentropic::area_ratio(m, AIR),
            3.0,
            Bracket::supersonic(1e-6, 100.0),
            &config,
        );
        assert!(matches!(result, Err(MachSolverError::MaxIters { .. })));
    }
}
