//! Flat record of named values that conditions are evaluated against.

use super::RuleValue;
use crate::domain::{ProjectProfile, TaskCategory, Urgency};
use std::collections::HashMap;

/// Context field names understood by the built-in profile mapping.
pub mod fields {
    /// Upper-case task category key, e.g. `BUG_FIX`.
    pub const TASK_CATEGORY: &str = "task_category";
    /// Team size as a number.
    pub const TEAM_SIZE: &str = "team_size";
    /// Upper-case complexity tier, e.g. `ENTERPRISE`.
    pub const COMPLEXITY: &str = "complexity";
    /// Whether tests were found.
    pub const HAS_TESTS: &str = "has_tests";
    /// Whether CI configuration was found.
    pub const HAS_CI_CD: &str = "has_ci_cd";
    /// Lower-case urgency, e.g. `medium`.
    pub const URGENCY: &str = "urgency";
    /// Project type string.
    pub const PROJECT_TYPE: &str = "project_type";
    /// Whether documentation was found.
    pub const HAS_DOCUMENTATION: &str = "has_documentation";
    /// Lower-case activity level.
    pub const ACTIVITY_LEVEL: &str = "activity_level";
    /// File count as a number.
    pub const FILE_COUNT: &str = "file_count";
}

/// Named values available to rule conditions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationContext {
    values: HashMap<String, RuleValue>,
}

impl EvaluationContext {
    /// Builds the context for one decision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(category: TaskCategory, profile: &ProjectProfile, urgency: Urgency) -> Self {
        let mut ctx = Self::default();
        ctx.insert(fields::TASK_CATEGORY, category.context_key());
        ctx.insert(fields::TEAM_SIZE, profile.team_size);
        ctx.insert(fields::COMPLEXITY, profile.complexity.context_key());
        ctx.insert(fields::HAS_TESTS, profile.has_tests);
        ctx.insert(fields::HAS_CI_CD, profile.has_ci_cd);
        ctx.insert(fields::URGENCY, urgency.as_str());
        ctx.insert(fields::PROJECT_TYPE, profile.project_type.as_str());
        ctx.insert(fields::HAS_DOCUMENTATION, profile.has_documentation);
        ctx.insert(fields::ACTIVITY_LEVEL, profile.recent_activity.as_str());
        ctx.insert(fields::FILE_COUNT, profile.file_count as f64);
        ctx
    }

    /// Sets a field, replacing any previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<RuleValue>) {
        self.values.insert(field.into(), value.into());
    }

    /// Looks up a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&RuleValue> {
        self.values.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ComplexityTier;

    #[test]
    fn test_keys_are_normalised() {
        let profile = ProjectProfile {
            complexity: ComplexityTier::Enterprise,
            team_size: 7,
            ..ProjectProfile::default()
        };
        let ctx = EvaluationContext::new(TaskCategory::BugFix, &profile, Urgency::High);

        assert_eq!(ctx.get(fields::TASK_CATEGORY), Some(&RuleValue::from("BUG_FIX")));
        assert_eq!(ctx.get(fields::COMPLEXITY), Some(&RuleValue::from("ENTERPRISE")));
        assert_eq!(ctx.get(fields::URGENCY), Some(&RuleValue::from("high")));
        assert_eq!(ctx.get(fields::TEAM_SIZE), Some(&RuleValue::Number(7.0)));
        assert_eq!(ctx.get(fields::HAS_CI_CD), Some(&RuleValue::Bool(false)));
        assert!(ctx.get("unknown_field").is_none());
    }
}
