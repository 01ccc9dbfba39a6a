use serde::{Deserialize, Serialize};

/// Root configuration — maps to `skillkit.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillkitConfig {
    pub validation: ValidationConfig,
    pub packaging: PackagingConfig,
    pub versions: VersionsConfig,
    pub logging: LoggingConfig,
}

// ── Validation ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Descriptions shorter than this many characters produce a warning.
    pub description_min_length: usize,
    /// Text that marks an unfinished template section, e.g. `[TODO`.
    pub placeholder_marker: String,
    /// Front-matter keys that are recognized. Anything else is a warning.
    pub allowed_fields: Vec<String>,
    /// Auxiliary files that do not belong in a bundle (warning when present).
    pub prohibited_files: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            description_min_length: 50,
            placeholder_marker: "[TODO".into(),
            allowed_fields: vec!["name".into(), "description".into(), "license".into()],
            prohibited_files: vec![
                "README.md".into(),
                "INSTALLATION_GUIDE.md".into(),
                "QUICK_REFERENCE.md".into(),
                "CHANGELOG.md".into(),
            ],
        }
    }
}

// ── Packaging ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagingConfig {
    /// Archive extension, without the leading dot.
    pub extension: String,
    /// File extensions of compiled artifacts that are never packaged.
    pub excluded_extensions: Vec<String>,
    /// Build-cache directory names whose contents are never packaged.
    pub excluded_dirs: Vec<String>,
}

impl Default for PackagingConfig {
    fn default() -> Self {
        Self {
            extension: "skill".into(),
            excluded_extensions: vec!["pyc".into()],
            excluded_dirs: vec!["__pycache__".into()],
        }
    }
}

// ── Version checker ────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionsConfig {
    /// Timeout for each package-manager invocation.
    pub timeout_secs: u64,
    /// Executable used for npm queries.
    pub npm_command: String,
    /// Executable used for pip queries.
    pub pip_command: String,
}

impl Default for VersionsConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            npm_command: "npm".into(),
            pip_command: "pip".into(),
        }
    }
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty", "json", "compact".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

// ── Validation of the config itself ────────────────────────────

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.severity {
            WarningSeverity::Error => "❌",
            WarningSeverity::Warning => "⚠️ ",
            WarningSeverity::Info => "💡",
        };
        write!(f, "{} {}: {}", icon, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

impl SkillkitConfig {
    /// Validate the config and return a list of warnings/errors.
    /// Returns `Err` with all messages joined if any severity is Error.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, String> {
        let mut warnings = Vec::new();

        // ── Placeholder marker ───
        if self.validation.placeholder_marker.trim().is_empty() {
            warnings.push(ConfigWarning {
                field: "validation.placeholder_marker".into(),
                message: "placeholder marker is empty — every description would match".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. '[TODO'".into()),
            });
        }

        // ── Description threshold ───
        if self.validation.description_min_length == 0 {
            warnings.push(ConfigWarning {
                field: "validation.description_min_length".into(),
                message: "threshold is 0 — short descriptions will never be flagged".into(),
                severity: WarningSeverity::Info,
                hint: None,
            });
        }

        // ── Allowed fields ───
        for required in ["name", "description"] {
            if !self.validation.allowed_fields.iter().any(|f| f == required) {
                warnings.push(ConfigWarning {
                    field: "validation.allowed_fields".into(),
                    message: format!("required field '{required}' is not in the allow-list"),
                    severity: WarningSeverity::Warning,
                    hint: Some(format!(
                        "Every SKILL.md must carry '{required}', so it will always be reported as unexpected"
                    )),
                });
            }
        }

        // ── Archive extension ───
        let ext = &self.packaging.extension;
        if ext.is_empty() {
            warnings.push(ConfigWarning {
                field: "packaging.extension".into(),
                message: "archive extension is empty".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 'skill'".into()),
            });
        } else if ext.contains(['/', '\\', '.']) {
            warnings.push(ConfigWarning {
                field: "packaging.extension".into(),
                message: format!("extension '{ext}' must not contain path separators or dots"),
                severity: WarningSeverity::Error,
                hint: Some("Use a bare extension like 'skill' or 'zip'".into()),
            });
        }

        // ── Subprocess timeout ───
        if self.versions.timeout_secs == 0 {
            warnings.push(ConfigWarning {
                field: "versions.timeout_secs".into(),
                message: "timeout is 0 — every package-manager query would time out".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 15".into()),
            });
        } else if self.versions.timeout_secs > 300 {
            warnings.push(ConfigWarning {
                field: "versions.timeout_secs".into(),
                message: format!("timeout is {}s — a hung registry query will stall the check", self.versions.timeout_secs),
                severity: WarningSeverity::Warning,
                hint: None,
            });
        }

        // ── Executables ───
        for (field, value) in [
            ("versions.npm_command", &self.versions.npm_command),
            ("versions.pip_command", &self.versions.pip_command),
        ] {
            if value.trim().is_empty() {
                warnings.push(ConfigWarning {
                    field: field.into(),
                    message: "executable name is empty".into(),
                    severity: WarningSeverity::Error,
                    hint: None,
                });
            }
        }

        // ── Logging format ───
        let valid_formats = ["pretty", "json", "compact"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}'", self.logging.format),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_formats.join(", "))),
            });
        }

        // ── Logging level ───
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.level".into(),
                message: format!("unknown log level '{}'", self.logging.level),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_levels.join(", "))),
            });
        }

        let errors: Vec<String> = warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .map(|w| format!("{}: {}", w.field, w.message))
            .collect();

        if !errors.is_empty() {
            return Err(format!("Configuration errors:\n  • {}", errors.join("\n  • ")));
        }

        Ok(warnings)
    }
}
