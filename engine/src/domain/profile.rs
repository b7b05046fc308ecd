//! Project profile value object.

use super::{ComplexityTier, ParseEnumError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Project type reported when no marker or saved configuration identifies one.
pub const UNKNOWN_PROJECT_TYPE: &str = "unknown";

/// Recent commit activity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// 20 commits or fewer in the window, or no history at all.
    #[default]
    Low,
    /// More than 20 commits.
    Medium,
    /// More than 100 commits.
    High,
}

impl ActivityLevel {
    /// Buckets a trailing-window commit count.
    #[must_use]
    pub const fn from_commit_count(commits: usize) -> Self {
        if commits > 100 {
            Self::High
        } else if commits > 20 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Case-insensitive parse.
    ///
    /// # Errors
    /// Returns [`ParseEnumError`] for unknown names.
    pub fn parse(s: &str) -> Result<Self, ParseEnumError> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseEnumError::new("activity level", s)),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured snapshot of a project used as scoring input.
///
/// Built fresh for every decision; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectProfile {
    /// Free-form project type such as `rust` or `web`.
    pub project_type: String,
    /// Number of people working on the project (at least 1).
    pub team_size: u32,
    /// Derived complexity tier.
    pub complexity: ComplexityTier,
    /// Detected technology tags. Ordered only for stable output.
    pub tech_stack: BTreeSet<String>,
    /// At least one test file was found.
    pub has_tests: bool,
    /// A CI configuration exists.
    pub has_ci_cd: bool,
    /// A README or docs directory exists.
    pub has_documentation: bool,
    /// Commit activity over the trailing window.
    pub recent_activity: ActivityLevel,
    /// Regular files under the root, ignoring caches and build output.
    pub file_count: usize,
}

impl Default for ProjectProfile {
    fn default() -> Self {
        Self {
            project_type: UNKNOWN_PROJECT_TYPE.to_string(),
            team_size: 1,
            complexity: ComplexityTier::Simple,
            tech_stack: BTreeSet::new(),
            has_tests: false,
            has_ci_cd: false,
            has_documentation: false,
            recent_activity: ActivityLevel::Low,
            file_count: 0,
        }
    }
}
