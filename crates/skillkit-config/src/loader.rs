use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::schema::SkillkitConfig;

/// Loads the skillkit configuration.
///
/// skillkit runs are short-lived, so unlike a daemon there is no reload or
/// file watching: the config is read once per process.
pub struct ConfigLoader {
    config: SkillkitConfig,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > SKILLKIT_CONFIG env > ~/.skillkit/skillkit.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("SKILLKIT_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".skillkit")
            .join("skillkit.toml")
    }

    /// Load the config from disk, falling back to defaults.
    pub fn load(path: Option<&Path>) -> skillkit_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            Self::parse(&raw, &config_path)?
        } else if path.is_some() {
            warn!(?config_path, "config file not found, using defaults");
            SkillkitConfig::default()
        } else {
            debug!(?config_path, "no config file, using defaults");
            SkillkitConfig::default()
        };

        let config = Self::apply_env_overrides(config);

        match config.validate() {
            Ok(warnings) => {
                for w in &warnings {
                    warn!("{}", w);
                }
            }
            Err(e) => {
                return Err(skillkit_core::SkillkitError::Config(e));
            }
        }

        Ok(Self {
            config,
            config_path,
        })
    }

    /// Parse TOML text into a config. `origin` is only used in error messages.
    pub fn parse(raw: &str, origin: &Path) -> skillkit_core::Result<SkillkitConfig> {
        toml::from_str::<SkillkitConfig>(raw).map_err(|e| {
            skillkit_core::SkillkitError::Config(format!(
                "failed to parse {}: {}",
                origin.display(),
                e
            ))
        })
    }

    /// Get a copy of the loaded config.
    pub fn get(&self) -> SkillkitConfig {
        self.config.clone()
    }

    /// Path the config was resolved from (it may not exist).
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    fn apply_env_overrides(config: SkillkitConfig) -> SkillkitConfig {
        Self::apply_overrides(config, |key| std::env::var(key).ok())
    }

    /// Apply SKILLKIT_* overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(mut config: SkillkitConfig, lookup: F) -> SkillkitConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("SKILLKIT_LOG_LEVEL") {
            config.logging.level = v;
        }
        if let Some(v) = lookup("SKILLKIT_DESCRIPTION_MIN_LENGTH") {
            match v.parse::<usize>() {
                Ok(n) => config.validation.description_min_length = n,
                Err(_) => warn!(value = %v, "ignoring non-numeric SKILLKIT_DESCRIPTION_MIN_LENGTH"),
            }
        }
        if let Some(v) = lookup("SKILLKIT_VERSION_TIMEOUT") {
            match v.parse::<u64>() {
                Ok(n) => config.versions.timeout_secs = n,
                Err(_) => warn!(value = %v, "ignoring non-numeric SKILLKIT_VERSION_TIMEOUT"),
            }
        }
        if let Some(v) = lookup("SKILLKIT_NPM") {
            config.versions.npm_command = v;
        }
        if let Some(v) = lookup("SKILLKIT_PIP") {
            config.versions.pip_command = v;
        }
        config
    }
}
