//! Decision composition.
//!
//! [`DecisionEngine`] runs the full pipeline for one task: classify the text,
//! profile the project, apply caller overrides, score the flow modes, and
//! package the winner with reasoning, steps, alternatives and metadata.
//!
//! The engine holds only immutable tables after construction, so a single
//! instance can be shared by reference across threads.

pub mod templates;

use crate::classifier::TaskClassifier;
use crate::domain::{DecisionContext, DecisionMetadata, DecisionResult, Urgency};
use crate::error::EngineError;
use crate::infrastructure::config::{DEFAULT_DECISION_LOG_PATH, Settings};
use crate::infrastructure::decision_log::{
    DecisionRecord, DecisionSink, JsonlDecisionLog, NullDecisionSink,
};
use crate::profiler::{ProfileSource, ProjectProfiler};
use crate::rules::{EstimationTable, RuleDocument, RuleEvaluator, RuleTable, best_flow};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{field, info, info_span, warn};
use uuid::Uuid;

/// The flow-mode recommender.
pub struct DecisionEngine {
    project_root: PathBuf,
    classifier: TaskClassifier,
    profiler: Box<dyn ProfileSource>,
    evaluator: RuleEvaluator,
    sink: Box<dyn DecisionSink>,
    default_urgency: Urgency,
}

impl std::fmt::Debug for DecisionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionEngine")
            .field("project_root", &self.project_root)
            .field("default_urgency", &self.default_urgency)
            .finish_non_exhaustive()
    }
}

impl DecisionEngine {
    /// Engine with built-in tables, profiling `root` and logging under it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::builder().project_root(root).build()
    }

    /// Starts a builder with every component at its default.
    #[must_use]
    pub fn builder() -> DecisionEngineBuilder {
        DecisionEngineBuilder::default()
    }

    /// Engine configured from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Rules`] if `rules_path` names a document that
    /// cannot be read or fails validation.
    pub fn from_settings(settings: &Settings) -> Result<Self, EngineError> {
        let root = settings.project_root();
        let mut builder = Self::builder()
            .project_root(&root)
            .default_urgency(settings.defaults.urgency);

        if let Some(path) = &settings.rules_path {
            let (rules, estimates) = RuleDocument::from_path(path)?.into_tables()?;
            builder = builder.rules(rules).estimates(estimates);
        }

        builder = if settings.decision_log.enabled {
            builder.decision_sink(JsonlDecisionLog::new(settings.decision_log_path(&root)))
        } else {
            builder.decision_sink(NullDecisionSink)
        };

        Ok(builder.build())
    }

    /// The profiled project directory.
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Recommends a flow mode for `task` in the engine's project.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] for blank task text or invalid
    /// overrides. Every other failure yields the default decision instead.
    pub fn decide(&self, task: &str, ctx: &DecisionContext) -> Result<DecisionResult, EngineError> {
        self.decide_at(&self.project_root, task, ctx)
    }

    /// Like [`Self::decide`], but profiles `root` instead of the engine's
    /// project.
    ///
    /// # Errors
    ///
    /// See [`Self::decide`].
    pub fn decide_at(
        &self,
        root: &Path,
        task: &str,
        ctx: &DecisionContext,
    ) -> Result<DecisionResult, EngineError> {
        if task.trim().is_empty() {
            return Err(EngineError::invalid_input("task", "must not be empty"));
        }
        ctx.validate()?;

        let urgency = ctx.urgency.unwrap_or(self.default_urgency);
        let span = info_span!("decide", category = field::Empty, urgency = urgency.as_str());
        let _enter = span.enter();

        let result = match self.compose(root, task, ctx, urgency) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Decision pipeline failed; returning default decision");
                DecisionResult::fallback(urgency, e.to_string())
            }
        };

        if let Err(e) = self.sink.record(&DecisionRecord::new(task, &result)) {
            warn!(error = %e, "Failed to append decision log");
        }
        Ok(result)
    }

    fn compose(
        &self,
        root: &Path,
        task: &str,
        ctx: &DecisionContext,
        urgency: Urgency,
    ) -> Result<DecisionResult, EngineError> {
        let category = self.classifier.classify(task);
        tracing::Span::current().record("category", category.as_str());

        let mut profile = self.profiler.profile(root)?;
        ctx.apply_to(&mut profile);

        let scores = self.evaluator.score_flows(category, &profile, urgency);
        let (flow, confidence) = best_flow(&scores);
        let estimated_hours = self.evaluator.estimate_hours(category, &profile);

        info!(
            flow = %flow,
            confidence,
            category = %category,
            estimated_hours,
            "Flow mode recommended"
        );

        Ok(DecisionResult {
            recommended_flow: flow,
            confidence,
            reasoning: templates::reasoning(flow, confidence, category, &profile),
            steps: templates::steps(flow),
            estimated_hours,
            alternatives: templates::alternatives(&scores, flow),
            metadata: DecisionMetadata {
                decision_id: Uuid::new_v4(),
                task_category: Some(category),
                urgency,
                project_profile: Some(profile),
                flow_scores: scores,
                generated_at: Utc::now(),
                fallback: false,
                fallback_reason: None,
            },
        })
    }
}

/// Builder for [`DecisionEngine`].
#[derive(Default)]
pub struct DecisionEngineBuilder {
    project_root: Option<PathBuf>,
    classifier: Option<TaskClassifier>,
    profiler: Option<Box<dyn ProfileSource>>,
    rules: Option<RuleTable>,
    estimates: Option<EstimationTable>,
    sink: Option<Box<dyn DecisionSink>>,
    default_urgency: Urgency,
}

impl DecisionEngineBuilder {
    /// Project directory to profile. Defaults to `.`.
    #[must_use]
    pub fn project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    /// Replaces the default keyword classifier.
    #[must_use]
    pub fn classifier(mut self, classifier: TaskClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Replaces the filesystem profiler.
    #[must_use]
    pub fn profile_source(mut self, source: impl ProfileSource + 'static) -> Self {
        self.profiler = Some(Box::new(source));
        self
    }

    /// Replaces the built-in rule table.
    #[must_use]
    pub fn rules(mut self, rules: RuleTable) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Replaces the built-in estimation table.
    #[must_use]
    pub fn estimates(mut self, estimates: EstimationTable) -> Self {
        self.estimates = Some(estimates);
        self
    }

    /// Replaces the decision log. Defaults to a JSON-lines file under the
    /// project root.
    #[must_use]
    pub fn decision_sink(mut self, sink: impl DecisionSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Urgency used when a decision does not name one.
    #[must_use]
    pub fn default_urgency(mut self, urgency: Urgency) -> Self {
        self.default_urgency = urgency;
        self
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> DecisionEngine {
        let project_root = self.project_root.unwrap_or_else(|| PathBuf::from("."));
        let sink = self.sink.unwrap_or_else(|| {
            Box::new(JsonlDecisionLog::new(project_root.join(DEFAULT_DECISION_LOG_PATH)))
        });
        DecisionEngine {
            classifier: self.classifier.unwrap_or_default(),
            profiler: self
                .profiler
                .unwrap_or_else(|| Box::new(ProjectProfiler::new())),
            evaluator: RuleEvaluator::new(
                self.rules.unwrap_or_default(),
                self.estimates.unwrap_or_default(),
            ),
            sink,
            default_urgency: self.default_urgency,
            project_root,
        }
    }
}
