use serde::{Deserialize, Serialize};

/// Deduction-and-bracket rule set an assessment is made under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Rules in force today: 11M/4.4M deductions, seven brackets.
    #[default]
    Current,
    /// Draft amendment rules: 15.5M/6.2M deductions, five brackets.
    Proposed,
}

impl Regime {
    pub fn all() -> &'static [Regime] {
        &[Regime::Current, Regime::Proposed]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::Current => "current",
            Regime::Proposed => "proposed",
        }
    }

    pub fn parse(value: &str) -> Option<Regime> {
        match value.trim().to_lowercase().as_str() {
            "current" => Some(Regime::Current),
            "proposed" => Some(Regime::Proposed),
            _ => None,
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_known_names() {
        assert_eq!(Regime::parse("current"), Some(Regime::Current));
        assert_eq!(Regime::parse("  Proposed "), Some(Regime::Proposed));
        assert_eq!(Regime::parse("CURRENT"), Some(Regime::Current));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Regime::parse("draft"), None);
        assert_eq!(Regime::parse(""), None);
    }

    #[test]
    fn round_trips_through_as_str() {
        for regime in Regime::all() {
            assert_eq!(Regime::parse(regime.as_str()), Some(*regime));
        }
    }
}
