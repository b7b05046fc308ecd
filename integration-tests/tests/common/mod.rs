//! Shared fixtures for integration tests.
//!
//! Builds throwaway project directories with marker files and git history,
//! and engines wired to them.

#![allow(dead_code)]

use anyhow::Result;
use flowmode_engine::infrastructure::decision_log::NullDecisionSink;
use flowmode_engine::DecisionEngine;
use git2::{Repository, Signature, Time};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary project directory.
pub struct ProjectFixture {
    /// Root of the project.
    pub dir: TempDir,
}

impl ProjectFixture {
    /// Creates an empty project.
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Project root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` to `rel`, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> Result<&Self> {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(self)
    }

    /// Creates an empty directory at `rel`.
    pub fn dir(&self, rel: &str) -> Result<&Self> {
        fs::create_dir_all(self.path().join(rel))?;
        Ok(self)
    }

    /// Initialises a git repository with one commit per `(name, email)`
    /// entry, all dated now.
    pub fn git_history(&self, authors: &[(&str, &str)]) -> Result<&Self> {
        let repo = Repository::init(self.path())?;
        let now = chrono::Utc::now().timestamp();
        for (name, email) in authors {
            commit(&repo, name, email, now)?;
        }
        Ok(self)
    }

    /// Engine profiling this project with logging disabled.
    pub fn engine(&self) -> DecisionEngine {
        DecisionEngine::builder()
            .project_root(self.path())
            .decision_sink(NullDecisionSink)
            .build()
    }
}

/// Adds an empty-tree commit on `HEAD` at `seconds` since the epoch.
pub fn commit(repo: &Repository, name: &str, email: &str, seconds: i64) -> Result<()> {
    let sig = Signature::new(name, email, &Time::new(seconds, 0))?;
    let tree_id = repo.index()?.write_tree()?;
    let tree = repo.find_tree(tree_id)?;
    let parent = match repo.head() {
        Ok(head) => head.target().map(|oid| repo.find_commit(oid)).transpose()?,
        Err(_) => None,
    };
    let parents: Vec<_> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, "commit", &tree, &parents)?;
    Ok(())
}

/// A Node.js project with tests, CI, docs and three recent authors.
pub fn mature_node_project() -> Result<ProjectFixture> {
    let fixture = ProjectFixture::new()?;
    fixture
        .file(
            "package.json",
            r#"{"name": "shop", "dependencies": {"express": "^4"}, "devDependencies": {"jest": "^29"}}"#,
        )?
        .file("src/index.js", "module.exports = {};")?
        .file("src/cart.test.js", "test('cart', () => {});")?
        .file(".github/workflows/ci.yml", "on: push")?
        .file("README.md", "# shop")?
        .git_history(&[
            ("Ada", "ada@example.com"),
            ("Grace", "grace@example.com"),
            ("Linus", "linus@example.com"),
            ("Ada", "ADA@example.com"),
        ])?;
    Ok(fixture)
}
