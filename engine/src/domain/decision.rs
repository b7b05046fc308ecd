//! Decision output types.

use super::{FlowMode, ProjectProfile, TaskCategory, Urgency};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A runner-up flow mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// The alternative mode.
    pub flow: FlowMode,
    /// Its score in `[0, 1]`.
    pub score: f64,
    /// When this mode would be the better choice.
    pub reason: String,
}

/// Diagnostic data attached to every decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMetadata {
    /// Identifier shared with the decision log record.
    pub decision_id: Uuid,
    /// Classified category; absent on a fallback decision.
    pub task_category: Option<TaskCategory>,
    /// Urgency the scores were computed with.
    pub urgency: Urgency,
    /// Profile after overrides; absent on a fallback decision.
    pub project_profile: Option<ProjectProfile>,
    /// Raw score per flow mode.
    pub flow_scores: BTreeMap<FlowMode, f64>,
    /// When the decision was produced.
    pub generated_at: DateTime<Utc>,
    /// True when the pipeline failed and the default decision was returned.
    pub fallback: bool,
    /// Cause of the fallback, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

/// The engine's recommendation for one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// Winning flow mode.
    pub recommended_flow: FlowMode,
    /// Score of the winning mode, in `[0, 1]`.
    pub confidence: f64,
    /// Human-readable rationale.
    pub reasoning: String,
    /// Process steps for the recommended mode.
    pub steps: Vec<String>,
    /// Estimated effort in whole hours, at least 1.
    pub estimated_hours: u32,
    /// Up to two runner-up modes, best first.
    pub alternatives: Vec<Alternative>,
    /// Diagnostics.
    pub metadata: DecisionMetadata,
}

impl DecisionResult {
    /// Flow recommended when the pipeline fails.
    pub const FALLBACK_FLOW: FlowMode = FlowMode::Standard;
    /// Confidence reported with the fallback decision.
    pub const FALLBACK_CONFIDENCE: f64 = 0.5;
    /// Estimate reported with the fallback decision.
    pub const FALLBACK_HOURS: u32 = 16;

    /// The fixed default decision returned when analysis fails.
    #[must_use]
    pub fn fallback(urgency: Urgency, reason: impl Into<String>) -> Self {
        Self {
            recommended_flow: Self::FALLBACK_FLOW,
            confidence: Self::FALLBACK_CONFIDENCE,
            reasoning: "Automatic analysis failed; defaulting to the standard flow mode."
                .to_string(),
            steps: vec![
                "Analyze requirements".to_string(),
                "Implement solution".to_string(),
                "Test and verify".to_string(),
            ],
            estimated_hours: Self::FALLBACK_HOURS,
            alternatives: Vec::new(),
            metadata: DecisionMetadata {
                decision_id: Uuid::new_v4(),
                task_category: None,
                urgency,
                project_profile: None,
                flow_scores: BTreeMap::new(),
                generated_at: Utc::now(),
                fallback: true,
                fallback_reason: Some(reason.into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let result = DecisionResult::fallback(Urgency::Medium, "boom");
        assert_eq!(result.recommended_flow, FlowMode::Standard);
        assert!((result.confidence - 0.5).abs() < f64::EPSILON);
        assert_eq!(result.steps.len(), 3);
        assert_eq!(result.estimated_hours, 16);
        assert!(result.alternatives.is_empty());
        assert!(result.metadata.fallback);
        assert_eq!(result.metadata.fallback_reason.as_deref(), Some("boom"));
    }

    #[test]
    fn test_stable_field_names() {
        let json = serde_json::to_value(DecisionResult::fallback(Urgency::Low, "x")).unwrap();
        for field in [
            "recommended_flow",
            "confidence",
            "reasoning",
            "steps",
            "estimated_hours",
            "alternatives",
            "metadata",
        ] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
        assert_eq!(json["recommended_flow"], "standard");
    }
}
