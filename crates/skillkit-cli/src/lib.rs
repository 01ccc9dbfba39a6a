//! # skillkit-cli
//!
//! Command-line interface for building agent skill bundles.
//!
//! ## Commands
//!
//! - `skillkit init` — Scaffold a new skill bundle from templates
//! - `skillkit validate` — Check a bundle and list errors and warnings
//! - `skillkit package` — Validate, then zip a bundle into `<name>.skill`
//! - `skillkit check` — Compare installed npm/pip versions against the latest
//! - `skillkit config` — Show the effective configuration
//! - `skillkit completions` — Generate shell completions

pub mod commands;

pub use commands::Cli;
