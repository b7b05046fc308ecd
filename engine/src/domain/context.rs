//! Caller-supplied overrides for a single decision.

use super::{ComplexityTier, ParseEnumError, ProjectProfile};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How soon the task has to land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// No time pressure.
    Low,
    /// Normal scheduling.
    #[default]
    Medium,
    /// Needs to ship as soon as possible.
    High,
}

impl Urgency {
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
            _ => Err(ParseEnumError::new("urgency", s)),
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Optional overrides applied on top of the derived project profile.
///
/// An override always replaces the derived value; nothing is merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionContext {
    /// Replaces the detected team size.
    pub team_size: Option<u32>,
    /// Replaces the detected project type.
    pub project_type: Option<String>,
    /// Replaces the derived complexity tier.
    pub complexity: Option<ComplexityTier>,
    /// Urgency of the task. The engine default applies when absent.
    pub urgency: Option<Urgency>,
}

impl DecisionContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the team size override.
    #[must_use]
    pub fn with_team_size(mut self, team_size: u32) -> Self {
        self.team_size = Some(team_size);
        self
    }

    /// Sets the project type override.
    #[must_use]
    pub fn with_project_type(mut self, project_type: impl Into<String>) -> Self {
        self.project_type = Some(project_type.into());
        self
    }

    /// Sets the complexity override.
    #[must_use]
    pub fn with_complexity(mut self, complexity: ComplexityTier) -> Self {
        self.complexity = Some(complexity);
        self
    }

    /// Sets the urgency.
    #[must_use]
    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }

    /// Rejects overrides that could never describe a real project.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidInput`] for a zero team size or a blank
    /// project type.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.team_size == Some(0) {
            return Err(EngineError::invalid_input(
                "team_size",
                "must be a positive integer",
            ));
        }
        if self
            .project_type
            .as_deref()
            .is_some_and(|t| t.trim().is_empty())
        {
            return Err(EngineError::invalid_input("project_type", "must not be blank"));
        }
        Ok(())
    }

    /// Writes every present override into `profile`.
    pub fn apply_to(&self, profile: &mut ProjectProfile) {
        if let Some(team_size) = self.team_size {
            profile.team_size = team_size;
        }
        if let Some(project_type) = &self.project_type {
            profile.project_type.clone_from(project_type);
        }
        if let Some(complexity) = self.complexity {
            profile.complexity = complexity;
        }
    }
}
