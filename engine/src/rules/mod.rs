//! Weighted rule evaluation and duration estimation.
//!
//! Rules are data: each [`RuleSpec`] names a flow mode, a weight and a list
//! of [`Condition`]s over an [`EvaluationContext`]. A rule's score is the
//! fraction of its conditions that hold, times its weight.

mod condition;
mod context;
mod evaluator;
mod table;

pub use condition::{Condition, Operator, RuleValue};
pub use context::{EvaluationContext, fields};
pub use evaluator::{RuleEvaluator, best_flow};
pub use table::{EstimationSpec, EstimationTable, RuleDocument, RuleSpec, RuleTable};
