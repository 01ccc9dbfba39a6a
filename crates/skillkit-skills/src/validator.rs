use std::path::Path;

use skillkit_config::ValidationConfig;
use skillkit_core::Diagnostics;
use tracing::{debug, info};

use crate::frontmatter::{FrontMatter, split_front_matter};
use crate::name::{MAX_NAME_LENGTH, NameViolation, name_violations};
use crate::{RESOURCE_DIRS, SKILL_FILE};

/// Inspect a bundle directory and collect every error and warning.
///
/// Checks run independently and accumulate. Only two conditions cut the run
/// short: a path that is missing or not a directory stops everything, and a
/// missing or unreadable SKILL.md skips the content checks (folder-level
/// checks still run). Nothing on disk is modified.
pub fn validate_skill(skill_path: &Path, policy: &ValidationConfig) -> Diagnostics {
    let mut diag = Diagnostics::new();

    if !skill_path.exists() {
        diag.error(format!("Skill folder does not exist: {}", skill_path.display()));
        return diag;
    }
    if !skill_path.is_dir() {
        diag.error(format!("Path is not a directory: {}", skill_path.display()));
        return diag;
    }

    // Resolve so that `.` or a trailing `..` still yields the real folder name.
    let resolved = std::fs::canonicalize(skill_path).unwrap_or_else(|_| skill_path.to_path_buf());
    let skill_name = resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    check_folder_name(&skill_name, &mut diag);

    let skill_md = resolved.join(SKILL_FILE);
    if !skill_md.exists() {
        diag.error(format!("Missing required file: {SKILL_FILE}"));
    } else {
        match std::fs::read_to_string(&skill_md) {
            Ok(content) => check_metadata(&content, &skill_name, policy, &mut diag),
            Err(e) => diag.error(format!("Cannot read {SKILL_FILE}: {e}")),
        }
    }

    check_prohibited_files(&resolved, policy, &mut diag);
    check_resource_dirs(&resolved, &mut diag);

    info!(
        skill = %skill_name,
        errors = diag.errors.len(),
        warnings = diag.warnings.len(),
        "validation finished"
    );
    diag
}

fn check_folder_name(skill_name: &str, diag: &mut Diagnostics) {
    for violation in name_violations(skill_name) {
        match violation {
            NameViolation::BadPattern => diag.error(format!(
                "Invalid skill folder name: '{skill_name}'. Must be hyphen-case (e.g., 'my-skill')"
            )),
            NameViolation::DoubleHyphen => {
                diag.error(format!("Skill name contains double hyphens: '{skill_name}'"))
            }
            NameViolation::TooLong(len) => diag.error(format!(
                "Skill name too long: {len} chars (max {MAX_NAME_LENGTH})"
            )),
        }
    }
}

fn check_metadata(
    content: &str,
    skill_name: &str,
    policy: &ValidationConfig,
    diag: &mut Diagnostics,
) {
    let marker = policy.placeholder_marker.as_str();

    let body = match split_front_matter(content) {
        Ok((block, body)) => {
            let fm = FrontMatter::parse(block, &policy.allowed_fields);
            check_front_matter(&fm, skill_name, policy, diag);
            body
        }
        Err(e) => {
            diag.error(e.to_string());
            content
        }
    };

    if body.contains(marker) {
        diag.warning(format!(
            "{SKILL_FILE} body contains {marker} placeholders that should be completed"
        ));
    }
}

fn check_front_matter(
    fm: &FrontMatter,
    skill_name: &str,
    policy: &ValidationConfig,
    diag: &mut Diagnostics,
) {
    match fm.get("name") {
        None => diag.error("Missing required frontmatter field: name"),
        Some(name) if name != skill_name => diag.error(format!(
            "Frontmatter name '{name}' doesn't match folder name '{skill_name}'"
        )),
        Some(_) => {}
    }

    let marker = policy.placeholder_marker.as_str();
    match fm.get("description") {
        None => diag.error("Missing required frontmatter field: description"),
        Some(desc) if desc.trim().is_empty() => diag.error("Description is empty"),
        Some(desc) if desc.contains(marker) => {
            diag.error(format!("Description contains {marker} placeholder"))
        }
        Some(desc) => {
            let len = desc.chars().count();
            if len < policy.description_min_length {
                diag.warning(format!(
                    "Description is short ({len} chars). Consider adding more detail about when to use this skill."
                ));
            }
        }
    }

    for field in fm.unrecognized() {
        diag.warning(format!(
            "Unexpected frontmatter field: '{field}'. Allowed fields: {}",
            policy.allowed_fields.join(", ")
        ));
    }
}

fn check_prohibited_files(skill_dir: &Path, policy: &ValidationConfig, diag: &mut Diagnostics) {
    for filename in &policy.prohibited_files {
        if skill_dir.join(filename).exists() {
            diag.warning(format!(
                "Found unnecessary file: {filename}. Skills should only contain essential files."
            ));
        }
    }
}

fn check_resource_dirs(skill_dir: &Path, diag: &mut Diagnostics) {
    for resource in RESOURCE_DIRS {
        let dir = skill_dir.join(resource);
        if !dir.exists() {
            continue;
        }
        if !dir.is_dir() {
            diag.error(format!("'{resource}' exists but is not a directory"));
            continue;
        }
        match std::fs::read_dir(&dir) {
            Ok(mut entries) => {
                if entries.next().is_none() {
                    diag.warning(format!(
                        "'{resource}/' directory is empty. Delete if not needed."
                    ));
                }
            }
            Err(e) => {
                debug!(?dir, error = %e, "cannot list resource directory");
                diag.error(format!("Cannot read '{resource}/': {e}"));
            }
        }
    }
}
