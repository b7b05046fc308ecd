//! Error types for the flow-mode engine.
//!
//! Only [`EngineError`] ever reaches a caller of the decision engine. The other
//! types describe failures that are recovered inside the pipeline: probe errors
//! fold into profile defaults, profile errors fold into the fallback decision,
//! and log errors are logged and dropped.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A required input was missing or invalid.
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput {
        /// Name of the offending input.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The project profile could not be produced.
    #[error("Profiling failed: {0}")]
    Profile(#[from] ProfileError),

    /// A rule or estimation table was rejected.
    #[error("Rule table error: {0}")]
    Rules(#[from] RuleError),

    /// Engine settings could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl EngineError {
    /// Shorthand for [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Failure of a single profiler probe.
///
/// Probes never surface these; the profiler replaces the probed value with its
/// documented default.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed.
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Version control history could not be read.
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    /// Saved project configuration could not be read.
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    /// A file was read but its content could not be interpreted.
    #[error("Failed to parse {source_name}: {reason}")]
    Parse {
        /// File or value being parsed.
        source_name: String,
        /// What went wrong.
        reason: String,
    },

    /// The probed signal is not present.
    #[error("Not present: {0}")]
    Missing(String),
}

/// Failure to produce a project profile at all.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The project root does not exist or is not a directory.
    #[error("Project root is not a directory: {path}")]
    NotADirectory {
        /// The rejected root.
        path: PathBuf,
    },

    /// A custom profile source failed.
    #[error("Profile source '{source_name}' failed: {reason}")]
    Source {
        /// Name of the profile source.
        source_name: String,
        /// Failure description.
        reason: String,
    },
}

/// Errors in rule or estimation tables.
#[derive(Error, Debug)]
pub enum RuleError {
    /// The rule document is not valid JSON or does not match the schema.
    #[error("Malformed rule document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The rule document could not be read.
    #[error("Failed to read rule document {path}: {source}")]
    Read {
        /// Path of the document.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A rule weight is negative or not finite.
    #[error("Rule for '{flow}' has invalid weight {weight}")]
    InvalidWeight {
        /// Flow mode the rule belongs to.
        flow: String,
        /// The rejected weight.
        weight: f64,
    },

    /// A range condition has reversed or non-numeric bounds.
    #[error("Condition on '{field}' has an invalid range")]
    InvalidRange {
        /// Field the condition tests.
        field: String,
    },

    /// An estimation entry is not usable.
    #[error("Estimation for '{category}' is invalid: {reason}")]
    InvalidEstimate {
        /// Task category of the entry.
        category: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Errors writing to the decision log.
#[derive(Error, Debug)]
pub enum LogError {
    /// The log file could not be opened or written.
    #[error("Decision log IO error at {path}: {source}")]
    Io {
        /// Log file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The record could not be serialised.
    #[error("Failed to serialise decision record: {0}")]
    Serialize(#[from] serde_json::Error),
}
