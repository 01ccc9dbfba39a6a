use std::path::PathBuf;

use thiserror::Error;

use crate::diagnostics::Diagnostics;

/// Unified error type for the skillkit tooling.
#[derive(Error, Debug)]
pub enum SkillkitError {
    // ── Naming errors ──────────────────────────────────────────
    #[error("invalid skill name: '{0}'")]
    InvalidName(String),

    // ── Bundle errors ──────────────────────────────────────────
    #[error("directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("skill folder does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("skill validation failed with {} error(s)", .0.errors.len())]
    InvalidSkill(Diagnostics),

    // ── Packaging errors ───────────────────────────────────────
    #[error("archive error: {0}")]
    Archive(String),

    // ── Version checking errors ────────────────────────────────
    #[error("invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("path traversal blocked: {0}")]
    PathTraversal(String),

    #[error("unknown package manager: {0}. Supported: npm, pip")]
    UnknownManager(String),

    #[error("manifest error: {0}")]
    Manifest(String),

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SkillkitError>;
