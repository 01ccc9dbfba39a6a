use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use skillkit_config::VersionsConfig;
use skillkit_core::{Result, SkillkitError};
use tracing::{debug, warn};

use crate::manager::PackageManager;

static PIP_INDEX_LATEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.+?)\)").expect("static regex"));

/// Where installed and published versions come from.
///
/// `Ok(None)` means "no data": not installed, not published, the tool is
/// missing, or the query timed out. `Err` is reserved for refusing the
/// query outright (e.g. a path that escapes `node_modules`).
#[async_trait]
pub trait PackageInfoSource: Send + Sync {
    async fn installed_version(
        &self,
        manager: PackageManager,
        package: &str,
    ) -> Result<Option<String>>;

    async fn latest_version(&self, manager: PackageManager, package: &str)
    -> Result<Option<String>>;
}

/// Queries the local project and the real package-manager executables.
pub struct SystemSource {
    project_root: PathBuf,
    npm_command: String,
    pip_command: String,
    timeout: Duration,
}

impl SystemSource {
    pub fn new(project_root: impl Into<PathBuf>, config: &VersionsConfig) -> Self {
        Self {
            project_root: project_root.into(),
            npm_command: config.npm_command.clone(),
            pip_command: config.pip_command.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Read `node_modules/<package>/package.json`, refusing anything that
    /// resolves outside `node_modules`.
    fn npm_installed(&self, package: &str) -> Result<Option<String>> {
        #[derive(Deserialize)]
        struct PackageJson {
            version: Option<String>,
        }

        let node_modules = self.project_root.join("node_modules");
        let pkg_json = node_modules.join(package).join("package.json");
        if !pkg_json.exists() {
            debug!(?pkg_json, "package not present in node_modules");
            return Ok(None);
        }

        let resolved = std::fs::canonicalize(&pkg_json)?;
        let root = std::fs::canonicalize(&node_modules)?;
        if !resolved.starts_with(&root) {
            return Err(SkillkitError::PathTraversal(package.to_string()));
        }

        let raw = match std::fs::read_to_string(&resolved) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = ?resolved, error = %e, "cannot read package.json");
                return Ok(None);
            }
        };
        match serde_json::from_str::<PackageJson>(&raw) {
            Ok(parsed) => Ok(parsed.version),
            Err(e) => {
                warn!(path = ?resolved, error = %e, "malformed package.json");
                Ok(None)
            }
        }
    }

    async fn run(&self, program: &str, args: &[&str]) -> Option<String> {
        run_command(program, args, &self.project_root, self.timeout).await
    }
}

#[async_trait]
impl PackageInfoSource for SystemSource {
    async fn installed_version(
        &self,
        manager: PackageManager,
        package: &str,
    ) -> Result<Option<String>> {
        match manager {
            PackageManager::Npm => self.npm_installed(package),
            PackageManager::Pip => {
                let output = self.run(&self.pip_command, &["show", package]).await;
                Ok(output.as_deref().and_then(parse_pip_show))
            }
        }
    }

    async fn latest_version(
        &self,
        manager: PackageManager,
        package: &str,
    ) -> Result<Option<String>> {
        match manager {
            PackageManager::Npm => Ok(self.run(&self.npm_command, &["info", package, "version"]).await),
            PackageManager::Pip => {
                let output = self
                    .run(&self.pip_command, &["index", "versions", package])
                    .await;
                Ok(output.as_deref().and_then(parse_pip_index))
            }
        }
    }
}

/// Run a command once with a timeout and return trimmed stdout.
///
/// A missing executable, a non-zero exit, a timeout or empty output all
/// come back as `None`.
pub async fn run_command(
    program: &str,
    args: &[&str],
    cwd: &Path,
    timeout: Duration,
) -> Option<String> {
    let mut cmd = tokio::process::Command::new(program);
    cmd.args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .kill_on_drop(true);

    debug!(program, ?args, "running package-manager query");
    let output = match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            debug!(program, error = %e, "failed to spawn");
            return None;
        }
        Err(_) => {
            debug!(program, timeout_secs = timeout.as_secs(), "command timed out");
            return None;
        }
    };

    if !output.status.success() {
        debug!(program, code = ?output.status.code(), "command failed");
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() { None } else { Some(stdout) }
}

/// `Version:` line of `pip show` output.
fn parse_pip_show(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.strip_prefix("Version:"))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// First parenthesized value of `pip index versions`, e.g. `requests (2.32.3)`.
fn parse_pip_index(output: &str) -> Option<String> {
    PIP_INDEX_LATEST
        .captures(output)
        .map(|caps| caps[1].trim().to_string())
}
