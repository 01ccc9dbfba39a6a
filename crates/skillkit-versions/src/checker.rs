use std::path::Path;

use serde::Serialize;
use skillkit_core::{Result, SkillkitError};
use tracing::{debug, info};

use crate::manager::PackageManager;
use crate::manifest::read_npm_dependencies;
use crate::package_name::sanitize_package_name;
use crate::source::PackageInfoSource;
use crate::version::{Verdict, classify};

/// Outcome of checking one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub package: String,
    pub manager: PackageManager,
    pub installed: Option<String>,
    pub latest: Option<String>,
    pub verdict: Verdict,
}

impl CheckResult {
    /// Human-readable report line (two lines for a major-behind package).
    pub fn render(&self) -> String {
        let mut line = format!(
            "{} {}: {} → {} [{}]",
            self.verdict.icon(),
            self.package,
            self.installed.as_deref().unwrap_or("not installed"),
            self.latest.as_deref().unwrap_or("unknown"),
            self.verdict,
        );
        if self.verdict == Verdict::MajorBehind {
            line.push_str("\n   ⚡ MAJOR version behind: check the migration guide before updating!");
        }
        line
    }
}

/// Sanitize `name`, look up both versions and classify them.
pub async fn check_package(
    source: &dyn PackageInfoSource,
    manager: PackageManager,
    name: &str,
) -> Result<CheckResult> {
    let package = sanitize_package_name(name)?;
    let installed = source.installed_version(manager, &package).await?;
    let latest = source.latest_version(manager, &package).await?;
    let verdict = classify(installed.as_deref(), latest.as_deref());
    debug!(%manager, %package, ?installed, ?latest, %verdict, "classified package");
    Ok(CheckResult {
        package,
        manager,
        installed,
        latest,
        verdict,
    })
}

/// Check every dependency declared in `<project_root>/package.json`.
///
/// A manifest with no dependencies is an error, as is a missing one.
pub async fn check_all_npm(
    source: &dyn PackageInfoSource,
    project_root: &Path,
) -> Result<Vec<CheckResult>> {
    let deps = read_npm_dependencies(project_root)?;
    if deps.is_empty() {
        return Err(SkillkitError::Manifest(
            "No dependencies found in package.json".into(),
        ));
    }

    info!(count = deps.len(), "checking npm dependencies");
    let mut results = Vec::with_capacity(deps.len());
    for dep in &deps {
        results.push(check_package(source, PackageManager::Npm, dep).await?);
    }
    Ok(results)
}
