use std::{fmt, str::FromStr};

use thiserror::Error;

/// The flow process whose relations are inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    /// Adiabatic, reversible flow.
    Isentropic,

    /// Flow through a stationary normal shock.
    NormalShock,

    /// Adiabatic constant-area flow with wall friction.
    Fanno,

    /// Frictionless constant-area flow with heat transfer.
    Rayleigh,
}

impl FlowRegime {
    /// All regimes, in declaration order.
    pub const ALL: [FlowRegime; 4] = [
        FlowRegime::Isentropic,
        FlowRegime::NormalShock,
        FlowRegime::Fanno,
        FlowRegime::Rayleigh,
    ];

    /// Returns the regime name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FlowRegime::Isentropic => "Isentropic",
            FlowRegime::NormalShock => "NormalShock",
            FlowRegime::Fanno => "Fanno",
            FlowRegime::Rayleigh => "Rayleigh",
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no flow regime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown flow regime `{0}`")]
pub struct ParseRegimeError(pub String);

impl FromStr for FlowRegime {
    type Err = ParseRegimeError;

    /// Parses a regime name, ignoring case and underscores (`normal_shock`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|regime| regime.name().to_ascii_lowercase() == key)
            .ok_or_else(|| ParseRegimeError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        for regime in FlowRegime::ALL {
            assert_eq!(regime.to_string().parse::<FlowRegime>(), Ok(regime));
        }
        assert_eq!("normal_shock".parse::<FlowRegime>(), Ok(FlowRegime::NormalShock));
        assert_eq!("FANNO".parse::<FlowRegime>(), Ok(FlowRegime::Fanno));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "oblique".parse::<FlowRegime>(),
            Err(ParseRegimeError("oblique".to_owned()))
        );
    }
}
