//! Single-pass directory scan feeding file count, depth, config-file count
//! and test detection.

use crate::error::ProbeError;
use glob::Pattern;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Directory names whose contents are not counted as project files.
pub const IGNORED_DIRS: &[&str] = &[
    ".git",
    ".flowmode",
    "node_modules",
    "__pycache__",
    ".pytest_cache",
    "target",
    "build",
    "dist",
];

/// File names never counted.
pub const IGNORED_FILES: &[&str] = &[".gitignore", ".DS_Store", "Thumbs.db"];

/// Glob patterns matched against file names to detect tests.
pub const TEST_FILE_PATTERNS: &[&str] = &[
    "test_*.py",
    "*_test.py",
    "test*.js",
    "*.test.js",
    "*.spec.js",
    "test*.java",
    "*Test.java",
    "test*.go",
    "*_test.go",
];

/// Files with these patterns directly inside a `tests` directory are tests.
pub const TEST_DIR_FILE_PATTERNS: &[&str] = &["*.py", "*.js", "*.java"];

/// Name of the directory whose direct children may be tests.
pub const TEST_DIR_NAME: &str = "tests";

/// Patterns matched against root-level entry names to count configuration
/// files. An entry matching several patterns counts once per pattern.
pub const CONFIG_PATTERNS: &[&str] = &[
    "*.json",
    "*.yaml",
    "*.yml",
    "*.toml",
    "*.ini",
    "*.cfg",
    "*.config",
    "*.properties",
    "*.env",
    "Dockerfile",
    "docker-compose*",
];

fn compile(patterns: &[&str]) -> Vec<Pattern> {
    patterns
        .iter()
        .map(|p| match Pattern::new(p) {
            Ok(pattern) => pattern,
            Err(e) => panic!("built-in glob should be valid at compile time: {e}"),
        })
        .collect()
}

static TEST_PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| compile(TEST_FILE_PATTERNS));
static TEST_DIR_PATTERNS: LazyLock<Vec<Pattern>> =
    LazyLock::new(|| compile(TEST_DIR_FILE_PATTERNS));
static CONFIG_GLOBS: LazyLock<Vec<Pattern>> = LazyLock::new(|| compile(CONFIG_PATTERNS));

/// Aggregates gathered while walking the project tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Regular files outside ignored directories.
    pub file_count: usize,
    /// Deepest directory nesting below the root (root itself is 0), counting
    /// ignored directories too.
    pub max_depth: usize,
    /// Configuration-pattern matches among root-level entries.
    pub config_files: usize,
    /// At least one file outside ignored directories looked like a test.
    pub has_tests: bool,
}

/// Walks `root` once.
///
/// Every directory counts towards depth; files below an ignored directory
/// are not counted and never mark the project as tested. Unreadable entries
/// below the root are skipped.
///
/// # Errors
/// Returns an error only if the root itself cannot be read.
pub fn scan(root: &Path) -> Result<WalkStats, ProbeError> {
    let mut stats = WalkStats::default();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                debug!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if entry.depth() == 1 {
            stats.config_files += CONFIG_GLOBS.iter().filter(|p| p.matches(&name)).count();
        }

        if entry.file_type().is_dir() {
            stats.max_depth = stats.max_depth.max(entry.depth());
            continue;
        }
        if !entry.file_type().is_file()
            || IGNORED_FILES.contains(&name.as_ref())
            || is_ignored(root, &entry)
        {
            continue;
        }

        stats.file_count += 1;
        if !stats.has_tests && is_test_file(&entry) {
            stats.has_tests = true;
        }
    }

    Ok(stats)
}

fn is_ignored(root: &Path, entry: &DirEntry) -> bool {
    entry.path().strip_prefix(root).is_ok_and(|rel| {
        rel.components()
            .any(|c| IGNORED_DIRS.contains(&c.as_os_str().to_string_lossy().as_ref()))
    })
}

fn is_test_file(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    if TEST_PATTERNS.iter().any(|p| p.matches(&name)) {
        return true;
    }
    let in_tests_dir = entry
        .path()
        .parent()
        .and_then(Path::file_name)
        .is_some_and(|dir| dir == TEST_DIR_NAME);
    in_tests_dir && TEST_DIR_PATTERNS.iter().any(|p| p.matches(&name))
}
