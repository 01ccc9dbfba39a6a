//! # skillkit-skills
//!
//! A skill is a directory containing a `SKILL.md` file (Markdown with a
//! front-matter block) plus optional `scripts/`, `references/` and
//! `assets/` resource directories. An external agent runtime reads the
//! instructions; this crate only produces and checks the bundles.
//!
//! ## SKILL.md Format
//!
//! ```markdown
//! ---
//! name: data-analyzer
//! description: Analyzes CSV data files and produces summary statistics for business reporting.
//! license: MIT
//! ---
//!
//! # Data Analyzer
//!
//! ## Instructions
//! 1. Load the CSV with `scripts/load.sh`
//! 2. ...
//! ```
//!
//! ## Pipeline
//!
//! 1. [`init_skill`] scaffolds a bundle from embedded templates
//! 2. [`validate_skill`] collects errors and warnings without touching disk
//! 3. [`package_skill`] validates, then zips the bundle into `<name>.skill`

pub mod frontmatter;
pub mod init;
pub mod name;
pub mod packager;
pub mod templates;
pub mod validator;

pub use frontmatter::{FrontMatter, FrontMatterError, SkillDocument};
pub use init::{InitReport, InitStep, init_skill, init_skill_with};
pub use name::{MAX_NAME_LENGTH, NameViolation, is_valid_skill_name, name_violations, title_case};
pub use packager::{PackageReport, package_skill};
pub use validator::validate_skill;

/// The metadata document every bundle must contain.
pub const SKILL_FILE: &str = "SKILL.md";

/// Optional resource directories, in the order they are created and checked.
pub const RESOURCE_DIRS: [&str; 3] = ["scripts", "references", "assets"];
