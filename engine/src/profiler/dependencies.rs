//! Dependency counting across the common manifest formats.

use crate::error::ProbeError;
use std::path::Path;
use tracing::debug;

type ManifestCounter = fn(&str) -> Result<usize, String>;

const MANIFESTS: &[(&str, ManifestCounter)] = &[
    ("package.json", count_package_json),
    ("requirements.txt", count_requirements),
    ("Cargo.toml", count_cargo_toml),
    ("pyproject.toml", count_pyproject),
    ("go.mod", count_go_mod),
    ("Gemfile", count_gemfile),
];

/// Sum of declared dependencies over every manifest in `root`.
///
/// A manifest that cannot be parsed contributes nothing.
///
/// # Errors
/// Returns an error only when a present manifest cannot be read.
pub fn count_dependencies(root: &Path) -> Result<usize, ProbeError> {
    let mut total = 0;
    for (name, counter) in MANIFESTS {
        let path = root.join(name);
        if !path.is_file() {
            continue;
        }
        let content = std::fs::read_to_string(&path)?;
        match counter(&content) {
            Ok(count) => total += count,
            Err(reason) => {
                let err = ProbeError::Parse {
                    source_name: (*name).to_string(),
                    reason,
                };
                debug!(error = %err, "Ignoring unparseable manifest");
            }
        }
    }
    Ok(total)
}

fn count_package_json(content: &str) -> Result<usize, String> {
    let json: serde_json::Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    Ok(["dependencies", "devDependencies", "peerDependencies"]
        .iter()
        .filter_map(|key| json.get(key).and_then(serde_json::Value::as_object))
        .map(serde_json::Map::len)
        .sum())
}

fn count_requirements(content: &str) -> Result<usize, String> {
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with('-'))
        .count())
}

fn table_len(value: Option<&toml::Value>) -> usize {
    value.and_then(toml::Value::as_table).map_or(0, toml::Table::len)
}

fn count_cargo_toml(content: &str) -> Result<usize, String> {
    let manifest: toml::Table = content.parse().map_err(|e: toml::de::Error| e.to_string())?;
    let sections = ["dependencies", "dev-dependencies", "build-dependencies"]
        .iter()
        .map(|key| table_len(manifest.get(*key)))
        .sum::<usize>();
    let workspace = table_len(
        manifest
            .get("workspace")
            .and_then(|w| w.get("dependencies")),
    );
    Ok(sections + workspace)
}

fn count_pyproject(content: &str) -> Result<usize, String> {
    let manifest: toml::Table = content.parse().map_err(|e: toml::de::Error| e.to_string())?;
    let pep621 = manifest
        .get("project")
        .and_then(|p| p.get("dependencies"))
        .and_then(toml::Value::as_array)
        .map_or(0, Vec::len);
    let poetry = table_len(
        manifest
            .get("tool")
            .and_then(|t| t.get("poetry"))
            .and_then(|p| p.get("dependencies")),
    );
    Ok(pep621 + poetry)
}

fn count_go_mod(content: &str) -> Result<usize, String> {
    let mut count = 0;
    let mut in_block = false;
    for line in content.lines().map(str::trim) {
        if in_block {
            if line == ")" {
                in_block = false;
            } else if !line.is_empty() && !line.starts_with("//") {
                count += 1;
            }
        } else if line.starts_with("require (") {
            in_block = true;
        } else if line.starts_with("require ") {
            count += 1;
        }
    }
    Ok(count)
}

fn count_gemfile(content: &str) -> Result<usize, String> {
    Ok(content
        .lines()
        .filter(|l| l.trim_start().starts_with("gem "))
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_package_json() {
        let count = count_package_json(
            r#"{"dependencies": {"a": "1", "b": "2"}, "devDependencies": {"c": "3"}}"#,
        )
        .unwrap();
        assert_eq!(count, 3);
        assert!(count_package_json("not json").is_err());
    }

    #[test]
    fn test_requirements_skip_comments_and_options() {
        let content = "# pinned\nrequests==2.0\n\n-r base.txt\nflask\n";
        assert_eq!(count_requirements(content).unwrap(), 2);
    }

    #[test]
    fn test_cargo_toml_sections() {
        let content = r#"
[package]
name = "demo"

[dependencies]
serde = "1"
regex = "1"

[dev-dependencies]
tempfile = "3"
"#;
        assert_eq!(count_cargo_toml(content).unwrap(), 3);
    }

    #[test]
    fn test_go_mod_block_and_single_lines() {
        let content = "module x\n\nrequire (\n\tgithub.com/a/b v1.0.0\n\tgithub.com/c/d v2.0.0\n)\nrequire github.com/e/f v0.1.0\n";
        assert_eq!(count_go_mod(content).unwrap(), 3);
    }

    #[test]
    fn test_broken_manifest_contributes_zero() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{ broken").unwrap();
        fs::write(dir.path().join("requirements.txt"), "numpy\npandas\n").unwrap();
        assert_eq!(count_dependencies(dir.path()).unwrap(), 2);
    }
}
