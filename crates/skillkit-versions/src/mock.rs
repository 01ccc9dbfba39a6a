//! In-memory package source for deterministic testing.
//!
//! Answers from pre-configured tables without touching the filesystem or
//! spawning processes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use skillkit_core::Result;

use crate::manager::PackageManager;
use crate::source::PackageInfoSource;

/// A source that returns canned versions.
///
/// # Example
/// ```
/// use skillkit_versions::PackageManager;
/// use skillkit_versions::mock::MockSource;
/// let source = MockSource::new()
///     .with_installed(PackageManager::Npm, "react", "18.2.0")
///     .with_latest(PackageManager::Npm, "react", "19.0.0");
/// ```
#[derive(Default)]
pub struct MockSource {
    installed: HashMap<(PackageManager, String), String>,
    latest: HashMap<(PackageManager, String), String>,
    /// Every `(manager, package)` queried, in order (for assertions in tests).
    pub queries: Arc<Mutex<Vec<(PackageManager, String)>>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_installed(mut self, manager: PackageManager, package: &str, version: &str) -> Self {
        self.installed
            .insert((manager, package.to_string()), version.to_string());
        self
    }

    pub fn with_latest(mut self, manager: PackageManager, package: &str, version: &str) -> Self {
        self.latest
            .insert((manager, package.to_string()), version.to_string());
        self
    }

    fn record(&self, manager: PackageManager, package: &str) {
        if let Ok(mut q) = self.queries.lock() {
            q.push((manager, package.to_string()));
        }
    }
}

#[async_trait]
impl PackageInfoSource for MockSource {
    async fn installed_version(
        &self,
        manager: PackageManager,
        package: &str,
    ) -> Result<Option<String>> {
        self.record(manager, package);
        Ok(self.installed.get(&(manager, package.to_string())).cloned())
    }

    async fn latest_version(
        &self,
        manager: PackageManager,
        package: &str,
    ) -> Result<Option<String>> {
        Ok(self.latest.get(&(manager, package.to_string())).cloned())
    }
}
