//! Marker-file probes: project type, technology tags, CI and documentation.

use crate::error::ProbeError;
use std::collections::BTreeSet;
use std::path::Path;

/// Marker files to project type, in probe order. The first hit wins.
pub const PROJECT_TYPE_MARKERS: &[(&[&str], &str)] = &[
    (&["package.json"], "web"),
    (&["requirements.txt", "pyproject.toml"], "python"),
    (&["pom.xml"], "java"),
    (&["Cargo.toml"], "rust"),
    (&["go.mod"], "go"),
    (&["pubspec.yaml"], "flutter"),
];

/// Marker path at the project root to technology tags.
pub const TECH_MARKERS: &[(&str, &[&str])] = &[
    ("package.json", &["JavaScript", "Node.js"]),
    ("requirements.txt", &["Python"]),
    ("pyproject.toml", &["Python"]),
    ("pom.xml", &["Java", "Maven"]),
    ("build.gradle", &["Java", "Gradle"]),
    ("Cargo.toml", &["Rust"]),
    ("go.mod", &["Go"]),
    ("pubspec.yaml", &["Flutter", "Dart"]),
    ("composer.json", &["PHP"]),
    ("Gemfile", &["Ruby"]),
    ("mix.exs", &["Elixir"]),
    ("project.clj", &["Clojure"]),
    ("Dockerfile", &["Docker"]),
    ("docker-compose.yml", &["Docker Compose"]),
    ("k8s", &["Kubernetes"]),
    (".github/workflows", &["GitHub Actions"]),
    (".gitlab-ci.yml", &["GitLab CI"]),
    ("terraform", &["Terraform"]),
    ("ansible", &["Ansible"]),
];

/// File-name wildcard matched at any depth below the root.
pub const WILDCARD_TECH_MARKER: (&str, &[&str]) = ("*.csproj", &["C#", ".NET"]);

/// Paths whose presence means a CI pipeline is configured.
pub const CI_PATHS: &[&str] = &[
    ".github/workflows",
    ".gitlab-ci.yml",
    ".travis.yml",
    "circle.yml",
    "appveyor.yml",
    "jenkins.yml",
    "Jenkinsfile",
];

/// Paths whose presence means the project is documented.
pub const DOC_PATHS: &[&str] = &[
    "README.md",
    "README.rst",
    "README.txt",
    "docs",
    "doc",
    "documentation",
    "CHANGELOG.md",
    "CHANGELOG.rst",
    "API.md",
    "api.md",
];

/// First marker-derived project type.
///
/// # Errors
/// Returns [`ProbeError::Missing`] when no marker exists.
pub fn detect_project_type(root: &Path) -> Result<&'static str, ProbeError> {
    PROJECT_TYPE_MARKERS
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| root.join(m).exists()))
        .map(|(_, project_type)| *project_type)
        .ok_or_else(|| ProbeError::Missing("project type marker".to_string()))
}

/// Union of the tags of every marker present under `root`.
///
/// # Errors
/// Returns [`ProbeError::Parse`] if the wildcard search pattern cannot be
/// built for this root.
pub fn detect_tech_stack(root: &Path) -> Result<BTreeSet<String>, ProbeError> {
    let mut tags: BTreeSet<String> = TECH_MARKERS
        .iter()
        .filter(|(marker, _)| root.join(marker).exists())
        .flat_map(|(_, labels)| labels.iter().map(|l| (*l).to_string()))
        .collect();

    let (pattern, labels) = WILDCARD_TECH_MARKER;
    if matches_below(root, pattern)? {
        tags.extend(labels.iter().map(|l| (*l).to_string()));
    }

    Ok(tags)
}

/// Whether any path at or below `root` has a file name matching `pattern`.
fn matches_below(root: &Path, pattern: &str) -> Result<bool, ProbeError> {
    let base = glob::Pattern::escape(&root.to_string_lossy());
    let full = format!("{base}/**/{pattern}");
    let entries = glob::glob(&full).map_err(|e| ProbeError::Parse {
        source_name: full.clone(),
        reason: e.to_string(),
    })?;
    Ok(entries.flatten().next().is_some())
}

/// Whether any CI configuration path exists.
#[must_use]
pub fn has_ci_cd(root: &Path) -> bool {
    CI_PATHS.iter().any(|p| root.join(p).exists())
}

/// Whether any documentation path exists.
#[must_use]
pub fn has_documentation(root: &Path) -> bool {
    DOC_PATHS.iter().any(|p| root.join(p).exists())
}
