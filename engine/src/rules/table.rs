//! Static rule and estimation tables.
//!
//! Both tables are plain data. The built-in versions live in the `Default`
//! impls; hosts and tests can swap them through [`RuleDocument`].

use super::context::fields;
use super::{Condition, EvaluationContext, Operator, RuleValue};
use crate::domain::{FlowMode, TaskCategory};
use crate::error::RuleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

fn default_weight() -> f64 {
    1.0
}

/// A weighted set of conditions supporting one flow mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Flow mode this rule votes for.
    pub flow: FlowMode,
    /// Score multiplier.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Conditions, evaluated independently.
    pub conditions: Vec<Condition>,
}

impl RuleSpec {
    /// Creates a rule with weight 1.0.
    #[must_use]
    pub fn new(flow: FlowMode, conditions: Vec<Condition>) -> Self {
        Self {
            flow,
            weight: default_weight(),
            conditions,
        }
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Fraction of matching conditions times the weight, clamped to `[0, 1]`.
    ///
    /// A rule without conditions scores 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn match_score(&self, ctx: &EvaluationContext) -> f64 {
        if self.conditions.is_empty() {
            return 0.0;
        }
        let matched = self.conditions.iter().filter(|c| c.evaluate(ctx)).count();
        let fraction = matched as f64 / self.conditions.len() as f64;
        (fraction * self.weight).clamp(0.0, 1.0)
    }

    /// Rejects negative or non-finite weights and malformed ranges.
    ///
    /// # Errors
    /// Returns the first [`RuleError`] found.
    pub fn validate(&self) -> Result<(), RuleError> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(RuleError::InvalidWeight {
                flow: self.flow.to_string(),
                weight: self.weight,
            });
        }
        self.conditions.iter().try_for_each(Condition::validate)
    }
}

/// Ordered collection of rule specs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: Vec<RuleSpec>,
}

impl RuleTable {
    /// Creates a validated table.
    ///
    /// # Errors
    /// Returns the first invalid rule's error.
    pub fn new(rules: Vec<RuleSpec>) -> Result<Self, RuleError> {
        rules.iter().try_for_each(RuleSpec::validate)?;
        Ok(Self { rules })
    }

    /// Rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        use Operator::{Between, Eq, Gt, In, Le};

        let rules = vec![
            RuleSpec::new(
                FlowMode::Minimal,
                vec![
                    Condition::new(
                        fields::TASK_CATEGORY,
                        In,
                        RuleValue::texts(&["BUG_FIX", "MAINTENANCE", "DOCUMENTATION"]),
                    ),
                    Condition::new(fields::TEAM_SIZE, Le, 3u32),
                    Condition::new(fields::COMPLEXITY, Eq, "SIMPLE"),
                    Condition::new(fields::URGENCY, Eq, "high"),
                ],
            ),
            RuleSpec::new(
                FlowMode::Standard,
                vec![
                    Condition::new(
                        fields::TASK_CATEGORY,
                        In,
                        RuleValue::texts(&["FEATURE_DEVELOPMENT", "TESTING", "REFACTORING"]),
                    ),
                    Condition::new(fields::TEAM_SIZE, Between, RuleValue::range(3.0, 8.0)),
                    Condition::new(fields::COMPLEXITY, In, RuleValue::texts(&["MODERATE", "COMPLEX"])),
                    Condition::new(fields::HAS_TESTS, Eq, true),
                ],
            ),
            RuleSpec::new(
                FlowMode::Complete,
                vec![
                    Condition::new(
                        fields::TASK_CATEGORY,
                        In,
                        RuleValue::texts(&["ARCHITECTURE", "RESEARCH", "DEPLOYMENT"]),
                    ),
                    Condition::new(fields::TEAM_SIZE, Gt, 8u32),
                    Condition::new(fields::COMPLEXITY, Eq, "ENTERPRISE"),
                    Condition::new(fields::HAS_CI_CD, Eq, true),
                ],
            ),
        ];
        Self { rules }
    }
}

/// Duration parameters for one task category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationSpec {
    /// Baseline effort in hours.
    pub base_hours: f64,
    /// Category-specific scaling factor.
    pub complexity_factor: f64,
}

impl EstimationSpec {
    /// Creates an estimation entry.
    #[must_use]
    pub const fn new(base_hours: f64, complexity_factor: f64) -> Self {
        Self {
            base_hours,
            complexity_factor,
        }
    }

    fn validate(&self, category: TaskCategory) -> Result<(), RuleError> {
        let invalid = |reason: &str| RuleError::InvalidEstimate {
            category: category.to_string(),
            reason: reason.to_string(),
        };
        if !self.base_hours.is_finite() || self.base_hours <= 0.0 {
            return Err(invalid("base_hours must be positive"));
        }
        if !self.complexity_factor.is_finite() || self.complexity_factor <= 0.0 {
            return Err(invalid("complexity_factor must be positive"));
        }
        Ok(())
    }
}

/// Per-category duration parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EstimationTable {
    entries: BTreeMap<TaskCategory, EstimationSpec>,
}

impl EstimationTable {
    /// Flat estimate in hours for categories without an entry.
    pub const DEFAULT_HOURS: u32 = 8;

    /// Creates a validated table. Categories may be left out.
    ///
    /// # Errors
    /// Returns [`RuleError::InvalidEstimate`] for non-positive values.
    pub fn new(entries: BTreeMap<TaskCategory, EstimationSpec>) -> Result<Self, RuleError> {
        for (category, spec) in &entries {
            spec.validate(*category)?;
        }
        Ok(Self { entries })
    }

    /// Entry for `category`, if any.
    #[must_use]
    pub fn get(&self, category: TaskCategory) -> Option<&EstimationSpec> {
        self.entries.get(&category)
    }
}

impl Default for EstimationTable {
    fn default() -> Self {
        let entries = TaskCategory::ALL
            .into_iter()
            .map(|category| {
                let spec = match category {
                    TaskCategory::FeatureDevelopment => EstimationSpec::new(16.0, 1.5),
                    TaskCategory::BugFix => EstimationSpec::new(4.0, 1.2),
                    TaskCategory::Refactoring => EstimationSpec::new(8.0, 1.3),
                    TaskCategory::Testing => EstimationSpec::new(6.0, 1.1),
                    TaskCategory::Documentation => EstimationSpec::new(4.0, 1.0),
                    TaskCategory::Research => EstimationSpec::new(12.0, 1.4),
                    TaskCategory::Architecture => EstimationSpec::new(24.0, 1.6),
                    TaskCategory::Deployment => EstimationSpec::new(8.0, 1.2),
                    TaskCategory::Maintenance => EstimationSpec::new(6.0, 1.1),
                };
                (category, spec)
            })
            .collect();
        Self { entries }
    }
}

/// Serialised form of both tables. Omitted sections keep the built-in table.
///
/// ```json
/// {
///   "rules": [
///     {"flow": "minimal", "weight": 1.0,
///      "conditions": [{"field": "team_size", "op": "<=", "value": 3}]}
///   ],
///   "estimates": {"bug-fix": {"base_hours": 4, "complexity_factor": 1.2}}
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleDocument {
    /// Replacement rule table.
    pub rules: Option<Vec<RuleSpec>>,
    /// Replacement estimation table.
    pub estimates: Option<BTreeMap<TaskCategory, EstimationSpec>>,
}

impl RuleDocument {
    /// Parses a JSON document.
    ///
    /// # Errors
    /// Returns [`RuleError::Malformed`] on invalid JSON or unknown names.
    pub fn from_json_str(json: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON document from disk.
    ///
    /// # Errors
    /// Returns [`RuleError::Read`] or [`RuleError::Malformed`].
    pub fn from_path(path: &Path) -> Result<Self, RuleError> {
        let content = std::fs::read_to_string(path).map_err(|source| RuleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Validates the document and fills omitted sections with the built-ins.
    ///
    /// # Errors
    /// Returns the first validation error.
    pub fn into_tables(self) -> Result<(RuleTable, EstimationTable), RuleError> {
        let rules = match self.rules {
            Some(rules) => RuleTable::new(rules)?,
            None => RuleTable::default(),
        };
        let estimates = match self.estimates {
            Some(entries) => EstimationTable::new(entries)?,
            None => EstimationTable::default(),
        };
        Ok((rules, estimates))
    }
}
