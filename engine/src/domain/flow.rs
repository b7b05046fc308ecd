//! Flow modes, the decision target.

use super::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Process template a task should follow.
///
/// Declaration order is the tie-break order when two modes score the same:
/// the earlier mode wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowMode {
    /// Lightweight: analyse, implement, verify.
    Minimal,
    /// Design review and tests around the implementation.
    Standard,
    /// Full process with architecture review, QA and deployment gates.
    Complete,
}

impl FlowMode {
    /// Every mode in tie-break order.
    pub const ALL: [Self; 3] = [Self::Minimal, Self::Standard, Self::Complete];

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Complete => "complete",
        }
    }

    /// Case-insensitive parse.
    ///
    /// # Errors
    /// Returns [`ParseEnumError`] for unknown names.
    pub fn parse(s: &str) -> Result<Self, ParseEnumError> {
        match s.trim().to_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "standard" => Ok(Self::Standard),
            "complete" => Ok(Self::Complete),
            _ => Err(ParseEnumError::new("flow mode", s)),
        }
    }
}

impl fmt::Display for FlowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order_is_tie_break_order() {
        assert!(FlowMode::Minimal < FlowMode::Standard);
        assert!(FlowMode::Standard < FlowMode::Complete);
        assert_eq!(FlowMode::ALL[0], FlowMode::Minimal);
    }

    #[test]
    fn test_round_trip_names() {
        for mode in FlowMode::ALL {
            assert_eq!(FlowMode::parse(mode.as_str()).unwrap(), mode);
        }
        assert!(FlowMode::parse("lightweight").is_err());
    }
}
