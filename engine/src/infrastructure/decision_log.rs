//! Append-only decision log.
//!
//! Each decision becomes one JSON object on its own line. The engine never
//! reads the log back; it exists for later analysis of how recommendations
//! were used.

use crate::domain::{ComplexityTier, DecisionResult, FlowMode, TaskCategory};
use crate::error::LogError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, info_span};
use uuid::Uuid;

/// Longest task excerpt stored in a record, in characters.
pub const MAX_TASK_CHARS: usize = 200;

/// Destination for decision records.
pub trait DecisionSink: Send + Sync {
    /// Persists one record.
    ///
    /// # Errors
    /// Returns [`LogError`] if the record could not be written. The engine
    /// logs the failure and still returns its decision.
    fn record(&self, record: &DecisionRecord) -> Result<(), LogError>;
}

/// Project context stored alongside a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Detected or overridden project type.
    pub project_type: String,
    /// Team size used for scoring.
    pub team_size: u32,
    /// Complexity tier used for scoring.
    pub complexity: ComplexityTier,
}

/// One line of the decision log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Same identifier as the decision's metadata.
    pub decision_id: Uuid,
    /// When the decision was produced.
    pub timestamp: DateTime<Utc>,
    /// Trimmed task text.
    pub task: String,
    /// Classified category, absent for fallback decisions.
    pub task_category: Option<TaskCategory>,
    /// Recommended mode.
    pub recommended_flow: FlowMode,
    /// Confidence of the recommendation.
    pub confidence: f64,
    /// Estimated effort.
    pub estimated_hours: u32,
    /// Whether the default decision was substituted.
    pub fallback: bool,
    /// Project context, absent for fallback decisions.
    pub project: Option<ProjectSummary>,
}

impl DecisionRecord {
    /// Builds the record for `result`.
    #[must_use]
    pub fn new(task: &str, result: &DecisionResult) -> Self {
        let meta = &result.metadata;
        Self {
            decision_id: meta.decision_id,
            timestamp: meta.generated_at,
            task: task.trim().chars().take(MAX_TASK_CHARS).collect(),
            task_category: meta.task_category,
            recommended_flow: result.recommended_flow,
            confidence: result.confidence,
            estimated_hours: result.estimated_hours,
            fallback: meta.fallback,
            project: meta.project_profile.as_ref().map(|p| ProjectSummary {
                project_type: p.project_type.clone(),
                team_size: p.team_size,
                complexity: p.complexity,
            }),
        }
    }
}

/// JSON-lines file sink. Parent directories are created on first write.
#[derive(Debug, Clone)]
pub struct JsonlDecisionLog {
    path: PathBuf,
}

impl JsonlDecisionLog {
    /// Creates a sink appending to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> LogError {
        LogError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DecisionSink for JsonlDecisionLog {
    fn record(&self, record: &DecisionRecord) -> Result<(), LogError> {
        let span = info_span!(target: "decision_log", "decision_record");
        let _enter = span.enter();

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        // Single write so concurrent appenders never interleave within a line.
        file.write_all(line.as_bytes())
            .map_err(|e| self.io_error(e))?;

        info!(
            target: "decision_log",
            decision_id = %record.decision_id,
            flow = %record.recommended_flow,
            fallback = record.fallback,
            "Decision recorded"
        );
        Ok(())
    }
}

/// Sink that discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDecisionSink;

impl DecisionSink for NullDecisionSink {
    fn record(&self, _record: &DecisionRecord) -> Result<(), LogError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Urgency;
    use tempfile::TempDir;

    #[test]
    fn test_record_trims_task() {
        let long = format!("  {}  ", "x".repeat(500));
        let result = DecisionResult::fallback(Urgency::Medium, "boom");
        let record = DecisionRecord::new(&long, &result);
        assert_eq!(record.task.chars().count(), MAX_TASK_CHARS);
        assert!(record.task.starts_with('x'));
        assert_eq!(record.decision_id, result.metadata.decision_id);
        assert!(record.fallback);
        assert!(record.project.is_none());
    }

    #[test]
    fn test_trim_respects_char_boundaries() {
        let task = "修复".repeat(150);
        let record = DecisionRecord::new(&task, &DecisionResult::fallback(Urgency::Low, "x"));
        assert_eq!(record.task.chars().count(), MAX_TASK_CHARS);
    }

    #[test]
    fn test_jsonl_appends_lines() {
        let dir = TempDir::new().unwrap();
        let log = JsonlDecisionLog::new(dir.path().join("nested/dir/decisions.jsonl"));
        let result = DecisionResult::fallback(Urgency::Medium, "boom");

        log.record(&DecisionRecord::new("first", &result)).unwrap();
        log.record(&DecisionRecord::new("second", &result)).unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: DecisionRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed.task, "second");
        assert_eq!(parsed.recommended_flow, FlowMode::Standard);
        assert_eq!(parsed.estimated_hours, 16);
    }

    #[test]
    fn test_unwritable_path_reports_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();

        let log = JsonlDecisionLog::new(blocker.join("decisions.jsonl"));
        let result = DecisionResult::fallback(Urgency::Medium, "boom");
        let err = log.record(&DecisionRecord::new("task", &result)).unwrap_err();
        assert!(matches!(err, LogError::Io { .. }));
    }

    #[test]
    fn test_null_sink_accepts_everything() {
        let result = DecisionResult::fallback(Urgency::Medium, "boom");
        assert!(NullDecisionSink.record(&DecisionRecord::new("t", &result)).is_ok());
    }
}
