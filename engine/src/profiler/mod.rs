//! Project profiling from filesystem and version-control signals.
//!
//! Every probe returns a `Result`; [`ProjectProfiler::analyze`] folds each
//! failure into that probe's documented default, so profiling as a whole
//! cannot fail.

pub mod dependencies;
pub mod history;
pub mod markers;
pub mod project_config;
pub mod walk;

use crate::domain::{ActivityLevel, ComplexityTier, ProjectProfile, UNKNOWN_PROJECT_TYPE};
use crate::error::{ProbeError, ProfileError};
use history::HistoryStats;
use project_config::SavedProjectConfig;
use std::path::Path;
use tracing::{debug, instrument};
use walk::WalkStats;

/// Source of project profiles for the decision engine.
///
/// The filesystem profiler is the production implementation; hosts and tests
/// can substitute snapshots or failing sources.
pub trait ProfileSource: Send + Sync {
    /// Produces a profile for the project at `root`.
    ///
    /// # Errors
    /// Returns [`ProfileError`] when no profile can be produced at all.
    fn profile(&self, root: &Path) -> Result<ProjectProfile, ProfileError>;
}

/// Raw inputs to the additive complexity score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexitySignals {
    /// Counted files.
    pub file_count: usize,
    /// Deepest directory nesting.
    pub max_depth: usize,
    /// Detected technology tags.
    pub tech_count: usize,
    /// Detected configuration files.
    pub config_files: usize,
    /// Declared dependencies.
    pub dependencies: usize,
}

impl ComplexitySignals {
    /// Sum of five threshold contributions, each 0, 1 or 2 points.
    #[must_use]
    pub fn score(&self) -> u32 {
        fn points(value: usize, high: usize, low: usize) -> u32 {
            if value > high {
                2
            } else if value > low {
                1
            } else {
                0
            }
        }

        points(self.file_count, 100, 50)
            + points(self.max_depth, 5, 3)
            + points(self.tech_count, 5, 3)
            + points(self.config_files, 10, 5)
            + points(self.dependencies, 50, 20)
    }

    /// Tier for [`Self::score`].
    #[must_use]
    pub fn tier(&self) -> ComplexityTier {
        ComplexityTier::from_score(self.score())
    }
}

/// Filesystem-backed project profiler.
#[derive(Debug, Clone)]
pub struct ProjectProfiler {
    history_window_days: u32,
}

impl Default for ProjectProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectProfiler {
    /// Trailing window for commit statistics.
    pub const DEFAULT_HISTORY_WINDOW_DAYS: u32 = 90;

    /// Creates a profiler with the default 90-day history window.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            history_window_days: Self::DEFAULT_HISTORY_WINDOW_DAYS,
        }
    }

    /// Overrides the history window.
    #[must_use]
    pub const fn with_history_window(mut self, days: u32) -> Self {
        self.history_window_days = days;
        self
    }

    /// Profiles the project at `root`. Never fails; see the module docs.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn analyze(&self, root: &Path) -> ProjectProfile {
        let saved = fold("project_config", project_config::load(root), SavedProjectConfig::default);
        let history = fold(
            "history",
            history::recent_history(root, self.history_window_days),
            HistoryStats::default,
        );
        let walk = fold("walk", walk::scan(root), WalkStats::default);
        let tech_stack = fold("tech_stack", markers::detect_tech_stack(root), Default::default);
        let dependencies = fold("dependencies", dependencies::count_dependencies(root), || 0);

        let project_type = saved.project_type.unwrap_or_else(|| {
            fold(
                "project_type",
                markers::detect_project_type(root).map(str::to_string),
                || UNKNOWN_PROJECT_TYPE.to_string(),
            )
        });

        let team_size = saved
            .team_size
            .or_else(|| u32::try_from(history.authors).ok().filter(|n| *n > 0))
            .unwrap_or(1);

        let signals = ComplexitySignals {
            file_count: walk.file_count,
            max_depth: walk.max_depth,
            tech_count: tech_stack.len(),
            config_files: walk.config_files,
            dependencies,
        };
        debug!(?signals, score = signals.score(), "Complexity signals");

        ProjectProfile {
            project_type,
            team_size,
            complexity: signals.tier(),
            tech_stack,
            has_tests: walk.has_tests,
            has_ci_cd: markers::has_ci_cd(root),
            has_documentation: markers::has_documentation(root),
            recent_activity: ActivityLevel::from_commit_count(history.commits),
            file_count: walk.file_count,
        }
    }
}

impl ProfileSource for ProjectProfiler {
    fn profile(&self, root: &Path) -> Result<ProjectProfile, ProfileError> {
        if !root.is_dir() {
            return Err(ProfileError::NotADirectory {
                path: root.to_path_buf(),
            });
        }
        Ok(self.analyze(root))
    }
}

/// A fixed profile, useful for hosts that snapshot projects elsewhere.
impl ProfileSource for ProjectProfile {
    fn profile(&self, _root: &Path) -> Result<ProjectProfile, ProfileError> {
        Ok(self.clone())
    }
}

fn fold<T>(probe: &'static str, result: Result<T, ProbeError>, default: impl FnOnce() -> T) -> T {
    result.unwrap_or_else(|e| {
        debug!(probe, error = %e, "Probe fell back to default");
        default()
    })
}
