//! Saved project configuration written by the scaffolding tooling.
//!
//! The document lives at `<root>/.flowmode/project.<ext>` in any format the
//! `config` crate understands (TOML, YAML, JSON, ...). Only two keys are read:
//! `project.project_type` and `project.team_size`.

use crate::error::ProbeError;
use config::{Config, File};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Directory holding the saved project configuration.
pub const STATE_DIR: &str = ".flowmode";
/// File stem of the saved project configuration.
pub const PROJECT_FILE_STEM: &str = "project";

static FIRST_INTEGER: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"(\d+)") {
    Ok(re) => re,
    Err(e) => panic!("regex pattern should be valid at compile time: {e}"),
});

/// Values recovered from the saved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedProjectConfig {
    /// Explicit project type, if set and non-blank.
    pub project_type: Option<String>,
    /// Explicit team size, if set and positive.
    pub team_size: Option<u32>,
}

/// Reads the saved configuration under `root`.
///
/// A missing document yields an empty [`SavedProjectConfig`]; keys that are
/// absent or unusable are left as `None`.
///
/// # Errors
/// Returns [`ProbeError::Config`] when a document exists but cannot be parsed.
pub fn load(root: &Path) -> Result<SavedProjectConfig, ProbeError> {
    let stem = root.join(STATE_DIR).join(PROJECT_FILE_STEM);
    let stem = stem.to_str().ok_or_else(|| ProbeError::Parse {
        source_name: stem.display().to_string(),
        reason: "path is not valid UTF-8".to_string(),
    })?;

    let cfg = Config::builder()
        .add_source(File::with_name(stem).required(false))
        .build()?;

    let project_type = cfg
        .get_string("project.project_type")
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    let team_size = cfg
        .get_string("project.team_size")
        .ok()
        .and_then(|raw| parse_team_size(&raw));

    Ok(SavedProjectConfig {
        project_type,
        team_size,
    })
}

/// Parses an integer or the first integer anywhere in a free-text size such
/// as `"5-10 people"` or `"about 5 people"`. Zero is rejected.
#[must_use]
pub fn parse_team_size(raw: &str) -> Option<u32> {
    FIRST_INTEGER
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|n| *n > 0)
}
