//! Result types for flow queries.

use std::{collections::BTreeMap, fmt};

use crate::support::flow_relations::Relation;

use super::FlowRegime;

/// Which Mach solution a [`RatioSet`] belongs to.
///
/// Compressible flow ratios are monotonic only on either side of `M = 1`, so
/// most ratios admit one subsonic and one supersonic solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MachBranch {
    /// `M < 1`.
    Subsonic,

    /// `M >= 1`.
    Supersonic,

    /// The single solution of a normal shock, always supersonic upstream.
    Normal,
}

impl MachBranch {
    /// Labels a Mach number as subsonic or supersonic.
    ///
    /// The sonic point itself belongs to the supersonic branch.
    #[must_use]
    pub fn from_mach(mach: f64) -> Self {
        if mach < 1.0 {
            MachBranch::Subsonic
        } else {
            MachBranch::Supersonic
        }
    }
}

impl fmt::Display for MachBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MachBranch::Subsonic => "Subsonic",
            MachBranch::Supersonic => "Supersonic",
            MachBranch::Normal => "Normal",
        })
    }
}

/// Every ratio of a regime evaluated at one Mach number.
///
/// Entries keep the regime's vocabulary order, Mach number first.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioSet {
    mach: f64,
    entries: Vec<(&'static str, f64)>,
}

impl RatioSet {
    /// Evaluates each named relation at `mach`.
    pub(super) fn evaluate(
        mach_key: &'static str,
        mach: f64,
        gamma: f64,
        relations: &[(&'static str, Relation)],
    ) -> Self {
        let entries = std::iter::once((mach_key, mach))
            .chain(
                relations
                    .iter()
                    .map(|&(name, relation)| (name, relation(mach, gamma))),
            )
            .collect();
        Self { mach, entries }
    }

    /// Returns the Mach number this set was evaluated at.
    #[must_use]
    pub fn mach(&self) -> f64 {
        self.mach
    }

    /// Returns the value of a named ratio.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|&(_, value)| value)
    }

    /// Iterates over `(name, value)` pairs in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of ratios in the set, Mach number included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The solution of a flow query: one [`RatioSet`] per Mach branch found.
///
/// Only branches with a physical solution are present; there is never an
/// empty or partially filled branch.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    regime: FlowRegime,
    branches: BTreeMap<MachBranch, RatioSet>,
}

impl SolverResult {
    pub(super) fn new(regime: FlowRegime) -> Self {
        Self {
            regime,
            branches: BTreeMap::new(),
        }
    }

    pub(super) fn with_branch(mut self, branch: MachBranch, ratios: RatioSet) -> Self {
        self.branches.insert(branch, ratios);
        self
    }

    #[must_use]
    pub fn regime(&self) -> FlowRegime {
        self.regime
    }

    /// Returns the ratios of one branch, if it was found.
    #[must_use]
    pub fn branch(&self, branch: MachBranch) -> Option<&RatioSet> {
        self.branches.get(&branch)
    }

    /// Iterates over the branches found, subsonic first.
    pub fn branches(&self) -> impl Iterator<Item = (MachBranch, &RatioSet)> {
        self.branches.iter().map(|(branch, ratios)| (*branch, ratios))
    }

    #[must_use]
    pub fn contains(&self, branch: MachBranch) -> bool {
        self.branches.contains_key(&branch)
    }

    /// Returns the Mach number of every branch found, subsonic first.
    #[must_use]
    pub fn machs(&self) -> Vec<f64> {
        self.branches.values().map(RatioSet::mach).collect()
    }

    /// Number of branches found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Looks up a ratio by name in the first branch found.
    ///
    /// Convenient for single-branch results; dual-branch callers usually want
    /// [`SolverResult::branch`] instead.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.branches.values().next().and_then(|ratios| ratios.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(mach: f64, _gamma: f64) -> f64 {
        2.0 * mach
    }

    const RELATIONS: &[(&str, Relation)] = &[("b", double), ("a", double)];

    #[test]
    fn branch_from_mach() {
        assert_eq!(MachBranch::from_mach(0.5), MachBranch::Subsonic);
        assert_eq!(MachBranch::from_mach(1.0), MachBranch::Supersonic);
        assert_eq!(MachBranch::from_mach(3.0), MachBranch::Supersonic);
        assert_eq!(MachBranch::Normal.to_string(), "Normal");
    }

    #[test]
    fn ratio_set_keeps_vocabulary_order() {
        let set = RatioSet::evaluate("M", 0.5, 1.4, RELATIONS);
        let names: Vec<_> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["M", "b", "a"]);
        assert_eq!(set.get("a"), Some(1.0));
        assert_eq!(set.get("missing"), None);
        assert_eq!(set.mach(), 0.5);
    }

    #[test]
    fn result_orders_branches() {
        let result = SolverResult::new(FlowRegime::Fanno)
            .with_branch(
                MachBranch::Supersonic,
                RatioSet::evaluate("M", 2.0, 1.4, RELATIONS),
            )
            .with_branch(
                MachBranch::Subsonic,
                RatioSet::evaluate("M", 0.5, 1.4, RELATIONS),
            );

        assert_eq!(result.machs(), [0.5, 2.0]);
        assert_eq!(result.lookup("a"), Some(1.0));
        assert!(result.contains(MachBranch::Subsonic));
        assert!(!result.contains(MachBranch::Normal));
        assert_eq!(result.len(), 2);
    }
}
