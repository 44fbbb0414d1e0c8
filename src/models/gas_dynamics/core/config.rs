use crate::support::mach_solver::{Bracket, MachSolverConfig};

use super::{Domain, FlowRegime};

/// Upper Mach bound of the supersonic search, per regime.
///
/// Targets whose root lies beyond the bound are reported as having no root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxMach {
    pub isentropic: f64,
    pub normal_shock: f64,
    pub fanno: f64,
    pub rayleigh: f64,
}

impl Default for MaxMach {
    fn default() -> Self {
        Self {
            isentropic: 1e4,
            normal_shock: 1e4,
            fanno: 100.0,
            rayleigh: 1e3,
        }
    }
}

impl MaxMach {
    /// Returns the bound for `regime`.
    #[must_use]
    pub fn get(&self, regime: FlowRegime) -> f64 {
        match regime {
            FlowRegime::Isentropic => self.isentropic,
            FlowRegime::NormalShock => self.normal_shock,
            FlowRegime::Fanno => self.fanno,
            FlowRegime::Rayleigh => self.rayleigh,
        }
    }
}

/// Configuration for solving flow queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowConfig {
    /// Offset of the search brackets from `M = 0` and from the sonic point.
    ///
    /// Every ratio is only piecewise monotonic, splitting at `M = 1`, so the
    /// subsonic and supersonic brackets stop just short of it. Must lie in
    /// `(0, 0.5)` so the subsonic bracket is not empty; queries solved with
    /// any other margin are rejected.
    pub sonic_margin: f64,

    /// Upper Mach bound of the supersonic search.
    pub max_mach: MaxMach,

    /// Bisection settings shared by every inversion.
    pub solver: MachSolverConfig,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            sonic_margin: 1e-6,
            max_mach: MaxMach::default(),
            solver: MachSolverConfig::default(),
        }
    }
}

impl FlowConfig {
    /// Valid range of [`FlowConfig::sonic_margin`].
    pub(super) fn margin_domain() -> Domain {
        Domain::open(0.0, 0.5)
    }

    /// Mach numbers accepted as a direct input, `[margin, max_mach]`.
    ///
    /// Matches the range the inverted ratios are searched over, keeping every
    /// reported ratio finite.
    pub(super) fn mach_domain(&self, regime: FlowRegime) -> Domain {
        Domain::closed(self.sonic_margin, self.max_mach.get(regime))
    }

    /// The subsonic bracket `(margin, 1 - margin)`.
    pub(super) fn subsonic(&self) -> Bracket {
        Bracket::subsonic(self.sonic_margin)
    }

    /// The supersonic bracket `(1 + margin, max_mach)`.
    pub(super) fn supersonic(&self, regime: FlowRegime) -> Bracket {
        Bracket::supersonic(self.sonic_margin, self.max_mach.get(regime))
    }

    /// The full bracket `(margin, max_mach)`, for relations monotonic through `M = 1`.
    pub(super) fn full(&self, regime: FlowRegime) -> Bracket {
        Bracket::new(self.sonic_margin, self.max_mach.get(regime))
    }

    /// The supersonic bracket closed at the sonic point, `[1, max_mach]`.
    pub(super) fn from_sonic(&self, regime: FlowRegime) -> Bracket {
        Bracket::new(1.0, self.max_mach.get(regime))
    }
}
