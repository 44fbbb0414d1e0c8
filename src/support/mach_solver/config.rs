use twine_solvers::equation::bisection;

/// Solver configuration for bracketed Mach inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachSolverConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the Mach number.
    pub mach_abs_tol: f64,

    /// Relative tolerance on the Mach number.
    pub mach_rel_tol: f64,

    /// Absolute tolerance on the residual (relation value - target).
    pub residual_tol: f64,
}

impl Default for MachSolverConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            mach_abs_tol: 1e-12,
            mach_rel_tol: 1e-12,
            residual_tol: 1e-12,
        }
    }
}

impl MachSolverConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.mach_abs_tol,
            x_rel_tol: self.mach_rel_tol,
            residual_tol: self.residual_tol,
        }
    }
}
