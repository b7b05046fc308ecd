//! Domain types shared by every stage of the decision pipeline.
//!
//! The three closed enumerations ([`TaskCategory`], [`ComplexityTier`],
//! [`FlowMode`]) key the pattern, rule and estimation tables, so adding a
//! variant forces every table to be revisited by the compiler.

mod category;
mod context;
mod decision;
mod flow;
mod profile;
mod tier;

pub use category::TaskCategory;
pub use context::{DecisionContext, Urgency};
pub use decision::{Alternative, DecisionMetadata, DecisionResult};
pub use flow::FlowMode;
pub use profile::{ActivityLevel, ProjectProfile, UNKNOWN_PROJECT_TYPE};
pub use tier::ComplexityTier;

use thiserror::Error;

/// Error for unknown enumeration names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseEnumError {
    /// Which enumeration was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
