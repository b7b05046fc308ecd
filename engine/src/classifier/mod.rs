//! Task classification from free text.
//!
//! Each category owns a set of regular expressions. A category scores one
//! point per pattern that matches anywhere in the lower-cased text; the best
//! score wins, ties go to the category listed first in the pattern table
//! (bug fix leads the built-in table), and a text that matches nothing is
//! classified as feature development.

mod patterns;

use crate::domain::TaskCategory;
use patterns::DEFAULT_PATTERNS;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

type PatternTable = Vec<(TaskCategory, Vec<Regex>)>;

static DEFAULT_TABLE: LazyLock<PatternTable> = LazyLock::new(|| {
    DEFAULT_PATTERNS
        .iter()
        .map(|source| {
            let compiled = source
                .patterns
                .iter()
                .map(|p| match Regex::new(p) {
                    Ok(re) => re,
                    Err(e) => panic!("built-in pattern should be valid at compile time: {e}"),
                })
                .collect();
            (source.category, compiled)
        })
        .collect()
});

/// Keyword-pattern task classifier.
///
/// The pattern table is immutable after construction, so one classifier can
/// be shared across threads.
#[derive(Debug, Clone)]
pub struct TaskClassifier {
    table: PatternTable,
}

impl Default for TaskClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskClassifier {
    /// Creates a classifier with the built-in bilingual pattern table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: DEFAULT_TABLE.clone(),
        }
    }

    /// Creates a classifier from a custom pattern table.
    ///
    /// Categories missing from `table` never match. Patterns are matched
    /// against lower-cased text, and ties go to the category that appears
    /// first in `table`. Repeated categories are merged into their first entry.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is not a valid regular expression.
    pub fn with_patterns<I, P>(table: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = (TaskCategory, Vec<P>)>,
        P: AsRef<str>,
    {
        let mut compiled: PatternTable = Vec::new();
        for (category, patterns) in table {
            let regexes = patterns
                .iter()
                .map(|p| Regex::new(p.as_ref()))
                .collect::<Result<Vec<_>, _>>()?;
            match compiled.iter_mut().find(|(c, _)| *c == category) {
                Some((_, existing)) => existing.extend(regexes),
                None => compiled.push((category, regexes)),
            }
        }
        Ok(Self { table: compiled })
    }

    /// Classifies a task description.
    ///
    /// Accepts `&str` or `Option<&str>`; empty and absent text both yield
    /// [`TaskCategory::FeatureDevelopment`].
    pub fn classify<'a>(&self, text: impl Into<Option<&'a str>>) -> TaskCategory {
        let Some(text) = text.into().filter(|t| !t.trim().is_empty()) else {
            return TaskCategory::default();
        };

        let lowered = text.to_lowercase();
        let mut best = TaskCategory::default();
        let mut best_score = 0;
        // Strict `>` keeps the earlier table entry on ties.
        for (category, patterns) in &self.table {
            let score = hits(patterns, &lowered);
            if score > best_score {
                best = *category;
                best_score = score;
            }
        }

        debug!(category = %best, score = best_score, "Classified task");
        best
    }

    /// Number of matching patterns per category for `text`.
    #[must_use]
    pub fn scores(&self, text: &str) -> BTreeMap<TaskCategory, usize> {
        let lowered = text.to_lowercase();
        self.table
            .iter()
            .map(|(category, patterns)| (*category, hits(patterns, &lowered)))
            .collect()
    }
}

fn hits(patterns: &[Regex], lowered: &str) -> usize {
    patterns.iter().filter(|re| re.is_match(lowered)).count()
}
