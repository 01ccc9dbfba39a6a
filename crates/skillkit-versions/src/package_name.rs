use std::sync::LazyLock;

use regex::Regex;
use skillkit_core::{Result, SkillkitError};

/// npm scoped (`@scope/name`) or plain names; letters, digits, `.`, `_`, `-`.
static VALID_PACKAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(@[a-zA-Z0-9._-]+/)?[a-zA-Z0-9._-]+$").expect("static regex")
});

/// Trim and check a package name before it reaches a path or a subprocess.
///
/// Rejects empty names, anything that could walk out of `node_modules`, and
/// characters outside the package-name alphabet (which also shuts out shell
/// metacharacters).
pub fn sanitize_package_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SkillkitError::InvalidPackageName {
            name: name.to_string(),
            reason: "package name cannot be empty".into(),
        });
    }
    if name.contains("..") || name.starts_with('/') || name.starts_with('\\') {
        return Err(SkillkitError::PathTraversal(name.to_string()));
    }
    // `.` or `@scope/.` names the current directory, not a package.
    if name.split('/').any(|segment| segment.chars().all(|c| c == '.')) {
        return Err(SkillkitError::PathTraversal(name.to_string()));
    }
    if !VALID_PACKAGE.is_match(name) {
        return Err(SkillkitError::InvalidPackageName {
            name: name.to_string(),
            reason: "expected format 'package-name' or '@scope/package-name'".into(),
        });
    }
    Ok(name.to_string())
}
