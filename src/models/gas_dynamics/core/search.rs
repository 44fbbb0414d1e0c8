//! Domain checks and Mach inversion shared by the regime solvers.

use tracing::debug;

use crate::support::mach_solver::{self, Bracket, MachSolverConfig, MachSolverError};

use super::{Domain, FlowError, FlowRegime};

/// The known ratio of a flow query, carried for error context.
#[derive(Debug, Clone, Copy)]
pub(super) struct Target<'a> {
    pub(super) regime: FlowRegime,
    pub(super) input_var: &'a str,
    pub(super) value: f64,
}

impl Target<'_> {
    pub(super) fn unknown_variable(&self, supported: &'static [&'static str]) -> FlowError {
        FlowError::UnknownVariable {
            regime: self.regime,
            input_var: self.input_var.to_owned(),
            supported,
        }
    }

    /// Checks the value against its physical domain.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::DomainViolation`] if the value is outside `domain`.
    pub(super) fn check(&self, domain: Domain) -> Result<(), FlowError> {
        if domain.contains(self.value) {
            return Ok(());
        }
        Err(FlowError::DomainViolation {
            regime: self.regime,
            input_var: self.input_var.to_owned(),
            value: self.value,
            domain,
        })
    }

    /// Inverts a relation monotonic over the whole bracket.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::NoRootInBracket`] if the value is not reached in
    /// the bracket, or [`FlowError::Solver`] if the solver fails.
    pub(super) fn find_mach(
        &self,
        relation: impl Fn(f64) -> f64,
        bracket: Bracket,
        solver: &MachSolverConfig,
    ) -> Result<f64, FlowError> {
        match mach_solver::find_mach(relation, self.value, bracket, solver) {
            Ok(mach) => Ok(mach),
            Err(MachSolverError::NoSignChange { .. }) => Err(self.no_root(vec![bracket])),
            Err(source) => Err(self.solver_failed(source)),
        }
    }

    /// Inverts a relation separately on each bracket, keeping every root found.
    ///
    /// A bracket without a sign change drops only its own branch. The sonic
    /// point lies outside both brackets, so a value equal to the relation at
    /// `M = 1`, up to rounding, is matched there and reported on the
    /// supersonic side.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::NoRootInBracket`] if no bracket holds a root, or
    /// [`FlowError::Solver`] if the solver fails on any bracket.
    pub(super) fn find_machs(
        &self,
        relation: impl Fn(f64) -> f64,
        brackets: [Bracket; 2],
        solver: &MachSolverConfig,
    ) -> Result<Vec<f64>, FlowError> {
        let sonic = matches_sonic(relation(1.0), self.value);
        let mut machs = Vec::with_capacity(brackets.len());

        for bracket in brackets {
            match mach_solver::find_mach(&relation, self.value, bracket, solver) {
                Ok(mach) => machs.push(mach),
                Err(MachSolverError::NoSignChange { .. }) if sonic && bracket.lo >= 1.0 => {
                    machs.push(1.0);
                }
                Err(MachSolverError::NoSignChange { residuals, .. }) => {
                    debug!(
                        regime = %self.regime,
                        input_var = self.input_var,
                        value = self.value,
                        %bracket,
                        ?residuals,
                        "no sign change, branch dropped"
                    );
                }
                Err(source) => return Err(self.solver_failed(source)),
            }
        }

        if machs.is_empty() {
            return Err(self.no_root(brackets.to_vec()));
        }
        Ok(machs)
    }

    fn no_root(&self, brackets: Vec<Bracket>) -> FlowError {
        FlowError::NoRootInBracket {
            regime: self.regime,
            input_var: self.input_var.to_owned(),
            value: self.value,
            brackets,
        }
    }

    fn solver_failed(&self, source: MachSolverError) -> FlowError {
        FlowError::Solver {
            regime: self.regime,
            input_var: self.input_var.to_owned(),
            source,
        }
    }
}

/// Relations that equal one at `M = 1` can land an ulp or two off it.
fn matches_sonic(sonic: f64, value: f64) -> bool {
    (sonic - value).abs() <= 4.0 * f64::EPSILON * value.abs().max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(value: f64) -> Target<'static> {
        Target {
            regime: FlowRegime::Fanno,
            input_var: "x",
            value,
        }
    }

    /// `|M - 1| + 1`, two-sided with its minimum at the sonic point.
    fn vee(mach: f64) -> f64 {
        (mach - 1.0).abs() + 1.0
    }

    const BRACKETS: [Bracket; 2] = [
        Bracket { lo: 0.5, hi: 0.999 },
        Bracket { lo: 1.001, hi: 3.0 },
    ];

    #[test]
    fn finds_both_branches() {
        let machs = target(1.25)
            .find_machs(vee, BRACKETS, &MachSolverConfig::default())
            .unwrap();
        assert_eq!(machs.len(), 2);
        assert!((machs[0] - 0.75).abs() < 1e-10);
        assert!((machs[1] - 1.25).abs() < 1e-10);
    }

    #[test]
    fn drops_branch_without_root() {
        let machs = target(1.75)
            .find_machs(vee, BRACKETS, &MachSolverConfig::default())
            .unwrap();
        assert_eq!(machs.len(), 1);
        assert!((machs[0] - 1.75).abs() < 1e-10);
    }

    #[test]
    fn sonic_value_lands_on_supersonic_branch() {
        let machs = target(1.0)
            .find_machs(vee, BRACKETS, &MachSolverConfig::default())
            .unwrap();
        assert_eq!(machs, [1.0]);
    }

    #[test]
    fn sonic_value_tolerates_rounding() {
        let nudged = |mach: f64| vee(mach) + f64::EPSILON;
        let machs = target(1.0)
            .find_machs(nudged, BRACKETS, &MachSolverConfig::default())
            .unwrap();
        assert_eq!(machs, [1.0]);
    }

    #[test]
    fn no_branch_is_an_error() {
        let err = target(5.0)
            .find_machs(vee, BRACKETS, &MachSolverConfig::default())
            .unwrap_err();
        match err {
            FlowError::NoRootInBracket { brackets, .. } => assert_eq!(brackets, BRACKETS),
            other => panic!("expected NoRootInBracket, got {other:?}"),
        }
    }

    #[test]
    fn domain_check() {
        assert!(target(0.5).check(Domain::open(0.0, 1.0)).is_ok());
        assert!(matches!(
            target(1.5).check(Domain::open(0.0, 1.0)),
            Err(FlowError::DomainViolation { value, .. }) if value == 1.5
        ));
    }
}
