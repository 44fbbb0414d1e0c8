//! Mach number inversion for the four compressible flow regimes.
//!
//! A flow query names a regime, one known ratio and its value. Solving it
//! validates the value against the ratio's physical domain, inverts the
//! ratio's relation for the Mach number on each branch where a root exists,
//! and evaluates the regime's full ratio set at every Mach number found.

mod config;
mod domain;
mod error;
mod fanno;
mod isentropic;
mod normal_shock;
mod query;
mod rayleigh;
mod regime;
mod results;
mod search;

pub use config::{FlowConfig, MaxMach};
pub use domain::{Domain, Limit};
pub use error::FlowError;
pub use query::FlowQuery;
pub use regime::{FlowRegime, ParseRegimeError};
pub use results::{MachBranch, RatioSet, SolverResult};

use tracing::debug;

use search::Target;

/// Solves a flow query.
///
/// # Errors
///
/// Returns a [`FlowError`] if the configured sonic margin is invalid, the
/// input variable is not supported by the regime, the value is outside its
/// domain, no branch has a root, or the Mach solver fails.
pub fn solve_query(query: &FlowQuery, config: &FlowConfig) -> Result<SolverResult, FlowError> {
    let gamma = query.gas().gamma();
    let target = Target {
        regime: query.regime(),
        input_var: query.input_var(),
        value: query.input_val(),
    };

    debug!(
        regime = %target.regime,
        input_var = target.input_var,
        value = target.value,
        gamma,
        "solving flow query"
    );

    Target {
        input_var: "sonic_margin",
        value: config.sonic_margin,
        ..target
    }
    .check(FlowConfig::margin_domain())?;

    match target.regime {
        FlowRegime::Isentropic => isentropic::solve(&target, gamma, config),
        FlowRegime::NormalShock => normal_shock::solve(&target, gamma, config),
        FlowRegime::Fanno => fanno::solve(&target, gamma, config),
        FlowRegime::Rayleigh => rayleigh::solve(&target, gamma, config),
    }
}

/// Evaluates every ratio of `regime` at a known Mach number.
///
/// For a normal shock `mach` is the upstream Mach number. Values outside a
/// relation's physical range are not rejected here.
#[must_use]
pub fn ratios_at(regime: FlowRegime, mach: f64, gamma: f64) -> RatioSet {
    match regime {
        FlowRegime::Isentropic => isentropic::ratio_set(mach, gamma),
        FlowRegime::NormalShock => normal_shock::ratio_set(mach, gamma),
        FlowRegime::Fanno => fanno::ratio_set(mach, gamma),
        FlowRegime::Rayleigh => rayleigh::ratio_set(mach, gamma),
    }
}
