//! Scores flow modes and estimates task duration.

use super::{EstimationTable, EvaluationContext, RuleTable};
use crate::domain::{FlowMode, ProjectProfile, TaskCategory, Urgency};
use std::collections::BTreeMap;
use tracing::debug;

/// Evaluates the rule table and the estimation table for one decision.
#[derive(Debug, Clone, Default)]
pub struct RuleEvaluator {
    rules: RuleTable,
    estimates: EstimationTable,
}

impl RuleEvaluator {
    /// Creates an evaluator over the given tables.
    #[must_use]
    pub fn new(rules: RuleTable, estimates: EstimationTable) -> Self {
        Self { rules, estimates }
    }

    /// Scores every flow mode in `[0, 1]`.
    ///
    /// Modes without a rule score 0; a mode named by several rules keeps its
    /// best score.
    #[must_use]
    pub fn score_flows(
        &self,
        category: TaskCategory,
        profile: &ProjectProfile,
        urgency: Urgency,
    ) -> BTreeMap<FlowMode, f64> {
        let ctx = EvaluationContext::new(category, profile, urgency);
        let mut scores: BTreeMap<FlowMode, f64> = FlowMode::ALL.iter().map(|m| (*m, 0.0)).collect();

        for rule in self.rules.rules() {
            let score = rule.match_score(&ctx);
            let entry = scores.entry(rule.flow).or_insert(0.0);
            if score > *entry {
                *entry = score;
            }
        }

        debug!(?scores, %category, %urgency, "Scored flow modes");
        scores
    }

    /// Estimated effort in whole hours, never below 1.
    ///
    /// `base_hours * complexity_factor * tier multiplier`, then ×1.2 for teams
    /// larger than 5 and ×0.9 for a single developer, truncated. A category
    /// without an entry gets [`EstimationTable::DEFAULT_HOURS`] unadjusted.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn estimate_hours(&self, category: TaskCategory, profile: &ProjectProfile) -> u32 {
        let Some(spec) = self.estimates.get(category) else {
            return EstimationTable::DEFAULT_HOURS;
        };

        let mut hours =
            spec.base_hours * spec.complexity_factor * profile.complexity.duration_multiplier();
        if profile.team_size > 5 {
            hours *= 1.2;
        } else if profile.team_size == 1 {
            hours *= 0.9;
        }

        // Clamped before the cast, so the value fits and is non-negative.
        hours.trunc().clamp(1.0, f64::from(u32::MAX)) as u32
    }
}

/// Picks the highest score; ties go to the mode declared first.
#[must_use]
pub fn best_flow(scores: &BTreeMap<FlowMode, f64>) -> (FlowMode, f64) {
    let mut best = (FlowMode::ALL[0], scores.get(&FlowMode::ALL[0]).copied().unwrap_or(0.0));
    for mode in FlowMode::ALL.into_iter().skip(1) {
        let score = scores.get(&mode).copied().unwrap_or(0.0);
        if score > best.1 {
            best = (mode, score);
        }
    }
    best
}
