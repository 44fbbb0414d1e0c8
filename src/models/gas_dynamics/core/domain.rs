use std::fmt;

/// One end of a [`Domain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Limit {
    /// The bound itself is excluded.
    Open(f64),

    /// The bound itself is included.
    Closed(f64),

    /// No bound on this side.
    Unbounded,
}

/// The physically valid range of an input ratio.
///
/// Every domain also excludes non-finite values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub lower: Limit,
    pub upper: Limit,
}

impl Domain {
    /// The open interval `(lo, hi)`.
    #[must_use]
    pub fn open(lo: f64, hi: f64) -> Self {
        Self {
            lower: Limit::Open(lo),
            upper: Limit::Open(hi),
        }
    }

    /// The half-open interval `(lo, hi]`.
    #[must_use]
    pub fn upper_closed(lo: f64, hi: f64) -> Self {
        Self {
            lower: Limit::Open(lo),
            upper: Limit::Closed(hi),
        }
    }

    /// The closed interval `[lo, hi]`.
    #[must_use]
    pub fn closed(lo: f64, hi: f64) -> Self {
        Self {
            lower: Limit::Closed(lo),
            upper: Limit::Closed(hi),
        }
    }

    /// The unbounded interval `[lo, inf)`.
    #[must_use]
    pub fn at_least(lo: f64) -> Self {
        Self {
            lower: Limit::Closed(lo),
            upper: Limit::Unbounded,
        }
    }

    /// The unbounded interval `(lo, inf)`.
    #[must_use]
    pub fn above(lo: f64) -> Self {
        Self {
            lower: Limit::Open(lo),
            upper: Limit::Unbounded,
        }
    }

    /// Returns `true` if `value` is finite and within the domain.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let above = match self.lower {
            Limit::Open(lo) => value > lo,
            Limit::Closed(lo) => value >= lo,
            Limit::Unbounded => true,
        };
        let below = match self.upper {
            Limit::Open(hi) => value < hi,
            Limit::Closed(hi) => value <= hi,
            Limit::Unbounded => true,
        };
        value.is_finite() && above && below
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            Limit::Open(lo) => write!(f, "({lo}, ")?,
            Limit::Closed(lo) => write!(f, "[{lo}, ")?,
            Limit::Unbounded => f.write_str("(-inf, ")?,
        }
        match self.upper {
            Limit::Open(hi) => write!(f, "{hi})"),
            Limit::Closed(hi) => write!(f, "{hi}]"),
            Limit::Unbounded => f.write_str("inf)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership() {
        let unit = Domain::open(0.0, 1.0);
        assert!(unit.contains(0.5));
        assert!(!unit.contains(0.0));
        assert!(!unit.contains(1.0));
        assert!(!unit.contains(f64::NAN));

        let peak = Domain::upper_closed(0.0, 2.0);
        assert!(peak.contains(2.0));
        assert!(!peak.contains(2.0 + 1e-12));

        let bounded = Domain::closed(1e-6, 100.0);
        assert!(bounded.contains(1e-6));
        assert!(bounded.contains(100.0));
        assert!(!bounded.contains(1e-200));
        assert!(!bounded.contains(1e200));

        let sonic = Domain::at_least(1.0);
        assert!(sonic.contains(1.0));
        assert!(!sonic.contains(1.0 - 1e-12));

        let above = Domain::above(1.0);
        assert!(above.contains(1e300));
        assert!(!above.contains(f64::INFINITY));
        assert!(!above.contains(1.0));
    }

    #[test]
    fn displays_as_interval() {
        assert_eq!(Domain::open(0.0, 1.0).to_string(), "(0, 1)");
        assert_eq!(Domain::upper_closed(0.0, 1.5).to_string(), "(0, 1.5]");
        assert_eq!(Domain::above(1.0).to_string(), "(1, inf)");
        assert_eq!(Domain::closed(0.5, 100.0).to_string(), "[0.5, 100]");
        assert_eq!(Domain::at_least(1.0).to_string(), "[1, inf)");
    }
}
