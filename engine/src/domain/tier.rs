//! Ordinal project complexity tiers.

use super::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Four-level summary of a project's structural complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    /// Small, flat projects.
    #[default]
    Simple,
    /// A few technologies or a moderately deep tree.
    Moderate,
    /// Many files, dependencies or configuration surfaces.
    Complex,
    /// Large multi-technology codebases.
    Enterprise,
}

impl ComplexityTier {
    /// Every tier in ascending order.
    pub const ALL: [Self; 4] = [Self::Simple, Self::Moderate, Self::Complex, Self::Enterprise];

    /// Maps an additive complexity score to a tier.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            s if s >= 7 => Self::Enterprise,
            s if s >= 5 => Self::Complex,
            s if s >= 3 => Self::Moderate,
            _ => Self::Simple,
        }
    }

    /// Duration multiplier applied by the estimator. Monotonic in the tier.
    #[must_use]
    pub const fn duration_multiplier(self) -> f64 {
        match self {
            Self::Simple => 1.0,
            Self::Moderate => 1.2,
            Self::Complex => 1.5,
            Self::Enterprise => 2.0,
        }
    }

    /// Wire name, e.g. `enterprise`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
            Self::Enterprise => "enterprise",
        }
    }

    /// Upper-case key used in rule conditions.
    #[must_use]
    pub const fn context_key(self) -> &'static str {
        match self {
            Self::Simple => "SIMPLE",
            Self::Moderate => "MODERATE",
            Self::Complex => "COMPLEX",
            Self::Enterprise => "ENTERPRISE",
        }
    }

    /// Case-insensitive parse.
    ///
    /// # Errors
    /// Returns [`ParseEnumError`] for unknown names.
    pub fn parse(s: &str) -> Result<Self, ParseEnumError> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "moderate" => Ok(Self::Moderate),
            "complex" => Ok(Self::Complex),
            "enterprise" => Ok(Self::Enterprise),
            _ => Err(ParseEnumError::new("complexity tier", s)),
        }
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplexityTier {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
