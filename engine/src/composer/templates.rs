//! Static text tables for reasoning, process steps and alternatives.

use crate::domain::{Alternative, ComplexityTier, FlowMode, ProjectProfile, TaskCategory};
use std::collections::BTreeMap;

/// Shown when no rationale fragment applies.
pub const GENERIC_RATIONALE: &str = "based on overall project profile";

/// Most runner-up modes reported with a decision.
pub const MAX_ALTERNATIVES: usize = 2;

const MINIMAL_STEPS: [&str; 3] = [
    "Confirm the change and how to verify it",
    "Implement the change",
    "Verify and commit",
];

const STANDARD_STEPS: [&str; 5] = [
    "Analyze requirements",
    "Sketch the design",
    "Implement with unit tests",
    "Code review",
    "Integrate and verify",
];

const COMPLETE_STEPS: [&str; 8] = [
    "Gather and document requirements",
    "Write a design document",
    "Review the design with stakeholders",
    "Plan implementation milestones",
    "Implement with full test coverage",
    "Code and security review",
    "Run integration and regression tests",
    "Deploy with monitoring and a rollback plan",
];

/// Qualitative label for a confidence value.
#[must_use]
pub fn confidence_label(confidence: f64) -> &'static str {
    if confidence > 0.8 {
        "high"
    } else if confidence > 0.6 {
        "medium"
    } else {
        "low, recommend manual review"
    }
}

fn category_fragment(category: TaskCategory) -> Option<&'static str> {
    match category {
        TaskCategory::FeatureDevelopment => None,
        TaskCategory::BugFix => Some("bug fixes favour a short, focused cycle"),
        TaskCategory::Refactoring => Some("refactoring needs review to protect behaviour"),
        TaskCategory::Testing => Some("test work builds on the existing suite"),
        TaskCategory::Documentation => Some("documentation changes carry little risk"),
        TaskCategory::Research => Some("research benefits from written findings"),
        TaskCategory::Architecture => Some("architecture work needs design review"),
        TaskCategory::Deployment => Some("deployments need a verified release path"),
        TaskCategory::Maintenance => Some("routine maintenance is low risk"),
    }
}

fn tier_fragment(tier: ComplexityTier) -> Option<&'static str> {
    match tier {
        ComplexityTier::Simple => Some("simple codebase"),
        ComplexityTier::Moderate => None,
        ComplexityTier::Complex => Some("complex codebase calls for careful review"),
        ComplexityTier::Enterprise => Some("enterprise complexity requires strict quality control"),
    }
}

/// Rationale fragments that apply to this decision, in a fixed order.
#[must_use]
pub fn rationale(category: TaskCategory, profile: &ProjectProfile) -> Vec<&'static str> {
    let mut fragments = Vec::new();
    fragments.extend(category_fragment(category));
    if profile.team_size <= 3 {
        fragments.push("small team");
    } else if profile.team_size > 8 {
        fragments.push("large team needs coordination");
    }
    fragments.extend(tier_fragment(profile.complexity));
    if profile.has_tests {
        fragments.push("existing test suite");
    }
    if profile.has_ci_cd {
        fragments.push("CI/CD pipeline in place");
    }
    fragments
}

/// Full reasoning sentence.
#[must_use]
pub fn reasoning(
    flow: FlowMode,
    confidence: f64,
    category: TaskCategory,
    profile: &ProjectProfile,
) -> String {
    let fragments = rationale(category, profile);
    let because = if fragments.is_empty() {
        GENERIC_RATIONALE.to_string()
    } else {
        fragments.join(", ")
    };
    format!(
        "Recommended {flow} flow mode ({} confidence): {because}.",
        confidence_label(confidence)
    )
}

/// Process steps for `flow`.
#[must_use]
pub fn steps(flow: FlowMode) -> Vec<String> {
    let table: &[&str] = match flow {
        FlowMode::Minimal => &MINIMAL_STEPS,
        FlowMode::Standard => &STANDARD_STEPS,
        FlowMode::Complete => &COMPLETE_STEPS,
    };
    table.iter().map(ToString::to_string).collect()
}

/// Reason shown for a runner-up mode, with its match score as a percentage.
/// Scores of 0.5 or less are flagged as a low match.
#[must_use]
pub fn alternative_reason(flow: FlowMode, score: f64) -> String {
    let base = match flow {
        FlowMode::Minimal => "Faster turnaround if the scope stays small",
        FlowMode::Standard => "Balanced process when some design and review are needed",
        FlowMode::Complete => "Full process if risk or scope grows",
    };
    let percent = score * 100.0;
    if score > 0.5 {
        format!("{base} (match: {percent:.1}%)")
    } else {
        format!("{base} (low match: {percent:.1}%)")
    }
}

/// Runner-up modes by descending score. Equal scores keep flow-mode order.
#[must_use]
pub fn alternatives(scores: &BTreeMap<FlowMode, f64>, recommended: FlowMode) -> Vec<Alternative> {
    let mut rest: Vec<(FlowMode, f64)> = scores
        .iter()
        .filter(|(flow, _)| **flow != recommended)
        .map(|(flow, score)| (*flow, *score))
        .collect();
    rest.sort_by(|a, b| b.1.total_cmp(&a.1));
    rest.truncate(MAX_ALTERNATIVES);
    rest.into_iter()
        .map(|(flow, score)| Alternative {
            flow,
            score,
            reason: alternative_reason(flow, score),
        })
        .collect()
}
