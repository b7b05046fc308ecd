//! Flowmode Engine - rule-based development process recommendations.
//!
//! Given a task description and a project directory, the engine classifies
//! the task, profiles the project from filesystem and git signals, scores a
//! weighted rule table and recommends one of three flow modes (`minimal`,
//! `standard`, `complete`) with a confidence, reasoning, process steps,
//! runner-up alternatives and an effort estimate.
//!
//! ```no_run
//! use flowmode_engine::{DecisionContext, DecisionEngine};
//!
//! let engine = DecisionEngine::new(".");
//! let result = engine
//!     .decide("fix login bug crash", &DecisionContext::new())
//!     .expect("task text is not blank");
//! println!("{} ({:.2})", result.recommended_flow, result.confidence);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Keyword-based task classification.
pub mod classifier;
/// Decision engine and output templates.
pub mod composer;
/// Domain types shared by every stage.
pub mod domain;
/// Error types.
pub mod error;
/// Infrastructure components (config, telemetry, decision log).
pub mod infrastructure;
pub mod profiler;
pub mod rules;

pub use classifier::TaskClassifier;
pub use composer::{DecisionEngine, DecisionEngineBuilder};
pub use domain::{
    Alternative, ComplexityTier, DecisionContext, DecisionResult, FlowMode, ProjectProfile,
    TaskCategory, Urgency,
};
pub use error::EngineError;
pub use profiler::{ProfileSource, ProjectProfiler};
pub use rules::RuleEvaluator;

/// Crate version, reported by the binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
