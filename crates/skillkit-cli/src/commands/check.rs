use std::path::Path;

use skillkit_core::SkillkitError;
use skillkit_versions::{
    CheckResult, PackageInfoSource, PackageManager, Verdict, check_all_npm, check_package,
};

/// `--all` scans `<project_root>/package.json`; otherwise one package is checked.
pub(super) async fn cmd_check(
    source: &dyn PackageInfoSource,
    project_root: &Path,
    manager: &str,
    package: Option<&str>,
    all: bool,
    json: bool,
) -> skillkit_core::Result<bool> {
    let manager: PackageManager = manager.parse()?;

    if all {
        if manager != PackageManager::Npm {
            return Err(usage("--all is only supported for npm"));
        }
        if package.is_some() {
            return Err(usage("pass either a package name or --all, not both"));
        }
        let results = check_all_npm(source, project_root).await?;
        if json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            for r in &results {
                println!("{}", r.render());
            }
            print!("{}", render_summary(&results));
        }
        return Ok(true);
    }

    let Some(package) = package else {
        return Err(usage("missing package name (or use --all with npm)"));
    };
    let result = check_package(source, manager, package).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.render());
    }
    Ok(!result.verdict.is_failure())
}

fn usage(message: &str) -> SkillkitError {
    SkillkitError::Other(anyhow::anyhow!(
        "{message}\nUsage: skillkit check <npm|pip> <package-name> | skillkit check npm --all"
    ))
}

fn render_summary(results: &[CheckResult]) -> String {
    let mut out = format!("\n📊 Checked {} packages\n", results.len());
    let major: Vec<&str> = results
        .iter()
        .filter(|r| r.verdict == Verdict::MajorBehind)
        .map(|r| r.package.as_str())
        .collect();
    if !major.is_empty() {
        out.push_str(&format!(
            "🚨 {} packages are MAJOR versions behind: {}\n",
            major.len(),
            major.join(", ")
        ));
        out.push_str("   Run version check on each before updating!\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillkit_versions::mock::MockSource;

    fn result(package: &str, verdict: Verdict) -> CheckResult {
        CheckResult {
            package: package.into(),
            manager: PackageManager::Npm,
            installed: Some("1.0.0".into()),
            latest: Some("2.0.0".into()),
            verdict,
        }
    }

    #[test]
    fn test_summary_lists_major_behind() {
        let out = render_summary(&[
            result("react", Verdict::MajorBehind),
            result("zod", Verdict::UpToDate),
            result("vite", Verdict::MajorBehind),
        ]);
        assert!(out.contains("Checked 3 packages"));
        assert!(out.contains("2 packages are MAJOR versions behind: react, vite"));
    }

    #[test]
    fn test_summary_without_major() {
        let out = render_summary(&[result("zod", Verdict::PatchBehind)]);
        assert_eq!(out, "\n📊 Checked 1 packages\n");
    }

    fn source() -> MockSource {
        MockSource::new()
            .with_installed(PackageManager::Npm, "react", "17.0.2")
            .with_latest(PackageManager::Npm, "react", "18.2.0")
            .with_installed(PackageManager::Npm, "zod", "3.22.4")
            .with_latest(PackageManager::Npm, "zod", "3.22.4")
            .with_latest(PackageManager::Pip, "requests", "2.32.3")
    }

    async fn run(manager: &str, package: Option<&str>, all: bool) -> skillkit_core::Result<bool> {
        let dir = tempfile::tempdir().unwrap();
        cmd_check(&source(), dir.path(), manager, package, all, false).await
    }

    #[tokio::test]
    async fn test_up_to_date_package_succeeds() {
        assert!(run("npm", Some("zod"), false).await.unwrap());
    }

    #[tokio::test]
    async fn test_major_behind_package_fails() {
        assert!(!run("npm", Some("react"), false).await.unwrap());
    }

    #[tokio::test]
    async fn test_not_installed_package_fails() {
        assert!(!run("pip", Some("requests"), false).await.unwrap());
    }

    #[tokio::test]
    async fn test_scan_succeeds_even_with_major_behind() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{"dependencies":{"react":"^17.0.0","zod":"^3.0.0"}}"#,
        )
        .unwrap();
        assert!(
            cmd_check(&source(), dir.path(), "npm", None, true, false)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_scan_without_manifest_is_error() {
        assert!(run("npm", None, true).await.is_err());
    }

    #[tokio::test]
    async fn test_all_with_pip_is_usage_error() {
        let err = run("pip", None, true).await.unwrap_err();
        assert!(err.to_string().contains("only supported for npm"));
    }

    #[tokio::test]
    async fn test_unknown_manager_is_error() {
        let err = run("cargo", Some("serde"), false).await.unwrap_err();
        assert!(matches!(err, SkillkitError::UnknownManager(_)));
    }

    #[tokio::test]
    async fn test_missing_package_is_usage_error() {
        assert!(run("npm", None, false).await.is_err());
    }
}
