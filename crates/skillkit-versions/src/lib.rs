//! # skillkit-versions
//!
//! Compares the installed version of an npm or pip package against the
//! latest published one and classifies how far behind it is.
//!
//! Package-manager access sits behind [`PackageInfoSource`] so the
//! classification in [`version`] stays pure. [`SystemSource`] shells out to
//! the real `npm`/`pip`; [`mock::MockSource`] serves canned answers.

pub mod checker;
pub mod manager;
pub mod manifest;
pub mod mock;
pub mod package_name;
pub mod source;
pub mod version;

pub use checker::{CheckResult, check_all_npm, check_package};
pub use manager::PackageManager;
pub use manifest::read_npm_dependencies;
pub use package_name::sanitize_package_name;
pub use source::{PackageInfoSource, SystemSource};
pub use version::{Verdict, classify, parse_version};
