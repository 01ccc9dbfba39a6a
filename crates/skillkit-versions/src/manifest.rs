use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;
use skillkit_core::{Result, SkillkitError};
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, serde_json::Value>,
}

/// Names declared in `package.json` under `dependencies` and
/// `devDependencies`, deduplicated and sorted.
pub fn read_npm_dependencies(project_root: &Path) -> Result<Vec<String>> {
    let path = project_root.join("package.json");
    if !path.is_file() {
        return Err(SkillkitError::Manifest(format!(
            "No package.json found in {}",
            project_root.display()
        )));
    }

    let raw = std::fs::read_to_string(&path)?;
    let manifest: PackageManifest = serde_json::from_str(&raw)?;

    let names: BTreeSet<String> = manifest
        .dependencies
        .into_keys()
        .chain(manifest.dev_dependencies.into_keys())
        .collect();
    debug!(?path, count = names.len(), "read npm manifest");
    Ok(names.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unions_and_sorts_dependencies() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{
                "name": "app",
                "dependencies": { "resend": "^3.0.0", "@types/node": "20.1.0" },
                "devDependencies": { "vitest": "^1.0.0", "resend": "^3.0.0" }
            }"#,
        )
        .unwrap();
        let deps = read_npm_dependencies(dir.path()).unwrap();
        assert_eq!(deps, vec!["@types/node", "resend", "vitest"]);
    }

    #[test]
    fn test_manifest_without_dependency_tables_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), r#"{"name":"bare"}"#).unwrap();
        assert!(read_npm_dependencies(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_manifest_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_npm_dependencies(dir.path()).unwrap_err();
        assert!(err.to_string().contains("No package.json"));
    }

    #[test]
    fn test_malformed_manifest_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "{").unwrap();
        assert!(matches!(
            read_npm_dependencies(dir.path()),
            Err(SkillkitError::Serialization(_))
        ));
    }
}
