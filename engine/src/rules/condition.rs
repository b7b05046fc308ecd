//! Condition DSL used by rule specs.

use super::EvaluationContext;
use crate::error::RuleError;
use serde::{Deserialize, Serialize};

/// Comparison operator of a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Values are equal.
    #[serde(alias = "==")]
    Eq,
    /// Values differ (including differing types).
    #[serde(alias = "!=")]
    Ne,
    /// Numeric less-than.
    #[serde(alias = "<")]
    Lt,
    /// Numeric less-or-equal.
    #[serde(alias = "<=")]
    Le,
    /// Numeric greater-than.
    #[serde(alias = ">")]
    Gt,
    /// Numeric greater-or-equal.
    #[serde(alias = ">=")]
    Ge,
    /// Field value is a member of the list.
    In,
    /// Field value is not a member of the list.
    NotIn,
    /// Numeric value lies in `[low, high]`, bounds inclusive.
    Between,
}

/// A literal in a condition or a field value in the evaluation context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// Boolean flag.
    Bool(bool),
    /// Any number; integers are widened.
    Number(f64),
    /// Text, compared case-sensitively.
    Text(String),
    /// List operand for `in`, `not_in` and `between`.
    List(Vec<RuleValue>),
}

impl RuleValue {
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Builds a list of text values.
    #[must_use]
    pub fn texts(values: &[&str]) -> Self {
        Self::List(values.iter().map(|v| Self::Text((*v).to_string())).collect())
    }

    /// Builds an inclusive numeric range operand.
    #[must_use]
    pub fn range(low: f64, high: f64) -> Self {
        Self::List(vec![Self::Number(low), Self::Number(high)])
    }
}

impl From<bool> for RuleValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for RuleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for RuleValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for RuleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RuleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One test of a context field against a literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Name of the context field.
    pub field: String,
    /// Comparison operator.
    pub op: Operator,
    /// Right-hand operand.
    pub value: RuleValue,
}

impl Condition {
    /// Creates a condition.
    pub fn new(field: impl Into<String>, op: Operator, value: impl Into<RuleValue>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Evaluates the condition. A missing field is always false, and ordering
    /// operators are false unless both sides are numbers.
    #[must_use]
    pub fn evaluate(&self, ctx: &EvaluationContext) -> bool {
        let Some(actual) = ctx.get(&self.field) else {
            return false;
        };

        match self.op {
            Operator::Eq => *actual == self.value,
            Operator::Ne => *actual != self.value,
            Operator::Lt => self.compare(actual, |a, b| a < b),
            Operator::Le => self.compare(actual, |a, b| a <= b),
            Operator::Gt => self.compare(actual, |a, b| a > b),
            Operator::Ge => self.compare(actual, |a, b| a >= b),
            Operator::In => match &self.value {
                RuleValue::List(items) => items.contains(actual),
                _ => false,
            },
            Operator::NotIn => match &self.value {
                RuleValue::List(items) => !items.contains(actual),
                _ => false,
            },
            Operator::Between => match (actual.as_number(), self.bounds()) {
                (Some(n), Some((low, high))) => low <= n && n <= high,
                _ => false,
            },
        }
    }

    /// Checks that a `between` operand is a well-formed range.
    ///
    /// # Errors
    /// Returns [`RuleError::InvalidRange`] for reversed or non-numeric bounds.
    pub fn validate(&self) -> Result<(), RuleError> {
        if self.op == Operator::Between && self.bounds().is_none_or(|(low, high)| low > high) {
            return Err(RuleError::InvalidRange {
                field: self.field.clone(),
            });
        }
        Ok(())
    }

    fn compare(&self, actual: &RuleValue, cmp: impl Fn(f64, f64) -> bool) -> bool {
        match (actual.as_number(), self.value.as_number()) {
            (Some(a), Some(b)) => cmp(a, b),
            _ => false,
        }
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        match &self.value {
            RuleValue::List(items) if items.len() == 2 => {
                Some((items[0].as_number()?, items[1].as_number()?))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> EvaluationContext {
        let mut ctx = EvaluationContext::default();
        ctx.insert("team_size", 4u32);
        ctx.insert("complexity", "MODERATE");
        ctx.insert("has_tests", true);
        ctx
    }

    #[test]
    fn test_equality_operators() {
        let ctx = ctx();
        assert!(Condition::new("has_tests", Operator::Eq, true).evaluate(&ctx));
        assert!(!Condition::new("has_tests", Operator::Ne, true).evaluate(&ctx));
        assert!(Condition::new("complexity", Operator::Ne, "SIMPLE").evaluate(&ctx));
        assert!(Condition::new("team_size", Operator::Eq, 4u32).evaluate(&ctx));
    }

    #[test]
    fn test_numeric_operators() {
        let ctx = ctx();
        assert!(Condition::new("team_size", Operator::Lt, 5u32).evaluate(&ctx));
        assert!(Condition::new("team_size", Operator::Le, 4u32).evaluate(&ctx));
        assert!(!Condition::new("team_size", Operator::Gt, 4u32).evaluate(&ctx));
        assert!(Condition::new("team_size", Operator::Ge, 4u32).evaluate(&ctx));
    }

    #[test]
    fn test_numeric_operator_on_text_is_false() {
        assert!(!Condition::new("complexity", Operator::Gt, 1u32).evaluate(&ctx()));
    }

    #[test]
    fn test_membership_operators() {
        let ctx = ctx();
        let tiers = RuleValue::texts(&["SIMPLE", "MODERATE"]);
        assert!(Condition::new("complexity", Operator::In, tiers.clone()).evaluate(&ctx));
        assert!(!Condition::new("complexity", Operator::NotIn, tiers).evaluate(&ctx));
        // scalar operand is not a set
        assert!(!Condition::new("complexity", Operator::In, "MODERATE").evaluate(&ctx));
    }

    #[test]
    fn test_range_is_inclusive() {
        let ctx = ctx();
        assert!(Condition::new("team_size", Operator::Between, RuleValue::range(4.0, 8.0)).evaluate(&ctx));
        assert!(Condition::new("team_size", Operator::Between, RuleValue::range(2.0, 4.0)).evaluate(&ctx));
        assert!(!Condition::new("team_size", Operator::Between, RuleValue::range(5.0, 8.0)).evaluate(&ctx));
    }

    #[test]
    fn test_missing_field_is_false() {
        let ctx = ctx();
        assert!(!Condition::new("budget", Operator::Eq, 1u32).evaluate(&ctx));
        assert!(!Condition::new("budget", Operator::Ne, 1u32).evaluate(&ctx));
        assert!(!Condition::new("budget", Operator::NotIn, RuleValue::texts(&["x"])).evaluate(&ctx));
    }

    #[test]
    fn test_range_validation() {
        assert!(Condition::new("team_size", Operator::Between, RuleValue::range(8.0, 2.0))
            .validate()
            .is_err());
        assert!(Condition::new("team_size", Operator::Between, "2..8").validate().is_err());
        assert!(Condition::new("team_size", Operator::Between, RuleValue::range(2.0, 8.0))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_deserialise_symbolic_operators() {
        let cond: Condition =
            serde_json::from_str(r#"{"field": "team_size", "op": "<=", "value": 3}"#).unwrap();
        assert_eq!(cond.op, Operator::Le);
        assert_eq!(cond.value, RuleValue::Number(3.0));

        let cond: Condition = serde_json::from_str(
            r#"{"field": "complexity", "op": "not_in", "value": ["SIMPLE"]}"#,
        )
        .unwrap();
        assert_eq!(cond.op, Operator::NotIn);
    }
}
