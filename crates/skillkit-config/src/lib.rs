//! # skillkit-config
//!
//! Configuration for the skillkit tools. Reads `skillkit.toml`, then applies
//! environment variable overrides. Every section has defaults, so an absent
//! file is a valid configuration.
//!
//! The validation policy knobs (description threshold, prohibited files,
//! allowed front-matter fields) live here rather than as hard-coded
//! constants so teams can tune them per repository.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::SkillkitConfig;
pub use schema::{
    ConfigWarning, LoggingConfig, PackagingConfig, ValidationConfig, VersionsConfig,
    WarningSeverity,
};
