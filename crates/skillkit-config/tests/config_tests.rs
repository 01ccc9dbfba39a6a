#[cfg(test)]
mod tests {
    use skillkit_config::ConfigLoader;
    use skillkit_config::schema::*;
    use std::collections::HashMap;
    use std::io::Write;

    // ── Default tests ──────────────────────────────────────────

    #[test]
    fn test_validation_config_defaults() {
        let config = ValidationConfig::default();
        assert_eq!(config.description_min_length, 50);
        assert_eq!(config.placeholder_marker, "[TODO");
        assert_eq!(config.allowed_fields, vec!["name", "description", "license"]);
        assert!(config.prohibited_files.contains(&"README.md".to_string()));
        assert!(config.prohibited_files.contains(&"CHANGELOG.md".to_string()));
        assert_eq!(config.prohibited_files.len(), 4);
    }

    #[test]
    fn test_packaging_config_defaults() {
        let config = PackagingConfig::default();
        assert_eq!(config.extension, "skill");
        assert_eq!(config.excluded_extensions, vec!["pyc"]);
        assert_eq!(config.excluded_dirs, vec!["__pycache__"]);
    }

    #[test]
    fn test_versions_config_defaults() {
        let config = VersionsConfig::default();
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.npm_command, "npm");
        assert_eq!(config.pip_command, "pip");
    }

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, "pretty");
    }

    #[test]
    fn test_defaults_validate_cleanly() {
        let warnings = SkillkitConfig::default().validate().unwrap();
        assert!(warnings.is_empty());
    }

    // ── TOML tests ─────────────────────────────────────────────

    #[test]
    fn test_config_toml_roundtrip() {
        let config = SkillkitConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let restored: SkillkitConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(restored.packaging.extension, config.packaging.extension);
        assert_eq!(
            restored.validation.prohibited_files,
            config.validation.prohibited_files
        );
        assert_eq!(restored.versions.timeout_secs, config.versions.timeout_secs);
    }

    #[test]
    fn test_partial_toml_applies_defaults() {
        let toml_str = r#"
[validation]
description_min_length = 80

[packaging]
extension = "zip"
"#;
        let config: SkillkitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validation.description_min_length, 80);
        assert_eq!(config.packaging.extension, "zip");
        // Defaults should fill in
        assert_eq!(config.validation.placeholder_marker, "[TODO");
        assert_eq!(config.packaging.excluded_dirs, vec!["__pycache__"]);
        assert_eq!(config.versions.timeout_secs, 15);
    }

    // ── Validation tests ───────────────────────────────────────

    #[test]
    fn test_empty_extension_is_error() {
        let mut config = SkillkitConfig::default();
        config.packaging.extension = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.contains("packaging.extension"));
    }

    #[test]
    fn test_path_like_extension_is_error() {
        let mut config = SkillkitConfig::default();
        config.packaging.extension = "../skill".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let mut config = SkillkitConfig::default();
        config.versions.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.contains("versions.timeout_secs"));
    }

    #[test]
    fn test_empty_placeholder_marker_is_error() {
        let mut config = SkillkitConfig::default();
        config.validation.placeholder_marker = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_allow_list_missing_required_field_warns() {
        let mut config = SkillkitConfig::default();
        config.validation.allowed_fields = vec!["name".into()];
        let warnings = config.validate().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, WarningSeverity::Warning);
        assert!(warnings[0].message.contains("description"));
    }

    #[test]
    fn test_unknown_log_format_warns() {
        let mut config = SkillkitConfig::default();
        config.logging.format = "xml".into();
        let warnings = config.validate().unwrap();
        assert!(warnings.iter().any(|w| w.field == "logging.format"));
    }

    #[test]
    fn test_warning_display_includes_hint() {
        let w = ConfigWarning {
            field: "packaging.extension".into(),
            message: "archive extension is empty".into(),
            severity: WarningSeverity::Error,
            hint: Some("Set to e.g. 'skill'".into()),
        };
        let s = w.to_string();
        assert!(s.contains("packaging.extension"));
        assert!(s.contains("↳ Set to e.g. 'skill'"));
    }

    // ── ConfigLoader tests ─────────────────────────────────────

    #[test]
    fn test_config_loader_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("skillkit.toml");
        let mut f = std::fs::File::create(&config_path).unwrap();
        writeln!(
            f,
            r#"
[validation]
prohibited_files = ["README.md", "NOTES.md"]

[versions]
timeout_secs = 30
pip_command = "pip3"
"#
        )
        .unwrap();

        let loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        let config = loader.get();
        assert_eq!(config.validation.prohibited_files, vec!["README.md", "NOTES.md"]);
        assert_eq!(config.versions.timeout_secs, 30);
        assert_eq!(config.versions.pip_command, "pip3");
        assert_eq!(loader.path(), config_path.as_path());
    }

    #[test]
    fn test_config_loader_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let loader = ConfigLoader::load(Some(missing.as_path())).unwrap();
        assert_eq!(loader.get().packaging.extension, "skill");
    }

    #[test]
    fn test_config_loader_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("skillkit.toml");
        std::fs::write(&config_path, "[validation\nbroken = ").unwrap();
        let err = ConfigLoader::load(Some(config_path.as_path())).err().unwrap();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_config_loader_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("skillkit.toml");
        std::fs::write(&config_path, "[versions]\ntimeout_secs = 0\n").unwrap();
        assert!(ConfigLoader::load(Some(config_path.as_path())).is_err());
    }

    // ── Override tests ─────────────────────────────────────────

    #[test]
    fn test_overrides_apply() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SKILLKIT_LOG_LEVEL", "debug"),
            ("SKILLKIT_DESCRIPTION_MIN_LENGTH", "20"),
            ("SKILLKIT_VERSION_TIMEOUT", "5"),
            ("SKILLKIT_NPM", "pnpm"),
            ("SKILLKIT_PIP", "uv-pip"),
        ]);
        let config = ConfigLoader::apply_overrides(SkillkitConfig::default(), |k| {
            env.get(k).map(|v| v.to_string())
        });
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.validation.description_min_length, 20);
        assert_eq!(config.versions.timeout_secs, 5);
        assert_eq!(config.versions.npm_command, "pnpm");
        assert_eq!(config.versions.pip_command, "uv-pip");
    }

    #[test]
    fn test_non_numeric_overrides_are_ignored() {
        let config = ConfigLoader::apply_overrides(SkillkitConfig::default(), |k| match k {
            "SKILLKIT_VERSION_TIMEOUT" => Some("soon".into()),
            "SKILLKIT_DESCRIPTION_MIN_LENGTH" => Some("-3".into()),
            _ => None,
        });
        assert_eq!(config.versions.timeout_secs, 15);
        assert_eq!(config.validation.description_min_length, 50);
    }

    // ── JSON roundtrip ─────────────────────────────────────────

    #[test]
    fn test_config_json_roundtrip() {
        let config = SkillkitConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: SkillkitConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.logging.level, config.logging.level);
    }
}
