//! Version-control history probe.

use crate::error::ProbeError;
use chrono::{Duration, Utc};
use git2::{Repository, Sort};
use std::collections::HashSet;
use std::path::Path;

/// Commit statistics for a trailing time window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryStats {
    /// Commits reachable from HEAD inside the window.
    pub commits: usize,
    /// Distinct author identities among those commits.
    pub authors: usize,
}

/// Reads commits reachable from HEAD newer than `window_days`.
///
/// Authors are identified by e-mail, or by name when the e-mail is empty.
///
/// # Errors
/// Returns [`ProbeError::Git`] when `root` is not a repository, has no
/// commits, or the object database cannot be read.
pub fn recent_history(root: &Path, window_days: u32) -> Result<HistoryStats, ProbeError> {
    let repo = Repository::open(root)?;
    let mut walk = repo.revwalk()?;
    walk.set_sorting(Sort::TIME)?;
    walk.push_head()?;

    let cutoff = Duration::try_days(i64::from(window_days))
        .and_then(|window| Utc::now().checked_sub_signed(window))
        .map_or(i64::MIN, |t| t.timestamp());
    let mut commits = 0;
    let mut authors = HashSet::new();

    for oid in walk {
        let commit = repo.find_commit(oid?)?;
        // TIME sorting yields newest first, so the first old commit ends the window.
        if commit.time().seconds() < cutoff {
            break;
        }
        commits += 1;

        let author = commit.author();
        let identity = match author.email() {
            Some(email) if !email.is_empty() => email.to_lowercase(),
            _ => author.name().unwrap_or_default().to_string(),
        };
        authors.insert(identity);
    }

    Ok(HistoryStats {
        commits,
        authors: authors.len(),
    })
}
