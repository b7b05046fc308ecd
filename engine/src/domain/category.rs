//! Task categories produced by the classifier.

use super::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classified intent of a task description.
///
/// Declaration order is the wire and report order. Classifier ties follow the
/// order of its pattern table instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskCategory {
    /// New functionality. Also the fallback when nothing matches.
    #[default]
    FeatureDevelopment,
    /// Defect repair.
    BugFix,
    /// Behaviour-preserving restructuring.
    Refactoring,
    /// Writing or extending tests.
    Testing,
    /// Documentation work.
    Documentation,
    /// Investigation, spikes and evaluations.
    Research,
    /// System-level design.
    Architecture,
    /// Releases, pipelines and rollouts.
    Deployment,
    /// Upgrades and routine upkeep.
    Maintenance,
}

impl TaskCategory {
    /// Every category in declaration order.
    pub const ALL: [Self; 9] = [
        Self::FeatureDevelopment,
        Self::BugFix,
        Self::Refactoring,
        Self::Testing,
        Self::Documentation,
        Self::Research,
        Self::Architecture,
        Self::Deployment,
        Self::Maintenance,
    ];

    /// Wire name, e.g. `bug-fix`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FeatureDevelopment => "feature-development",
            Self::BugFix => "bug-fix",
            Self::Refactoring => "refactoring",
            Self::Testing => "testing",
            Self::Documentation => "documentation",
            Self::Research => "research",
            Self::Architecture => "architecture",
            Self::Deployment => "deployment",
            Self::Maintenance => "maintenance",
        }
    }

    /// Upper-case key used in rule conditions, e.g. `BUG_FIX`.
    #[must_use]
    pub const fn context_key(self) -> &'static str {
        match self {
            Self::FeatureDevelopment => "FEATURE_DEVELOPMENT",
            Self::BugFix => "BUG_FIX",
            Self::Refactoring => "REFACTORING",
            Self::Testing => "TESTING",
            Self::Documentation => "DOCUMENTATION",
            Self::Research => "RESEARCH",
            Self::Architecture => "ARCHITECTURE",
            Self::Deployment => "DEPLOYMENT",
            Self::Maintenance => "MAINTENANCE",
        }
    }

    /// Parses either the wire name or the upper-case context key.
    ///
    /// # Errors
    /// Returns [`ParseEnumError`] for unknown names.
    pub fn parse(s: &str) -> Result<Self, ParseEnumError> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| ParseEnumError::new("task category", s))
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_wire_name_and_context_key() {
        assert_eq!(TaskCategory::parse("bug-fix").unwrap(), TaskCategory::BugFix);
        assert_eq!(TaskCategory::parse("BUG_FIX").unwrap(), TaskCategory::BugFix);
        assert_eq!(
            "Feature-Development".parse::<TaskCategory>().unwrap(),
            TaskCategory::FeatureDevelopment
        );
        assert!(TaskCategory::parse("gardening").is_err());
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&TaskCategory::FeatureDevelopment).unwrap();
        assert_eq!(json, "\"feature-development\"");
        let back: TaskCategory = serde_json::from_str("\"maintenance\"").unwrap();
        assert_eq!(back, TaskCategory::Maintenance);
    }

    #[test]
    fn test_default_is_feature_development() {
        assert_eq!(TaskCategory::default(), TaskCategory::FeatureDevelopment);
        assert_eq!(TaskCategory::ALL[0], TaskCategory::default());
    }
}
