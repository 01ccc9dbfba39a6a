//! # skillkit-core
//!
//! Core types for the skillkit tooling: the unified error type and the
//! diagnostic set produced by bundle validation. Every other crate in the
//! workspace speaks in these terms.

pub mod diagnostics;
pub mod error;

pub use diagnostics::Diagnostics;
pub use error::{Result, SkillkitError};
