use std::path::Path;

use skillkit_config::SkillkitConfig;
use skillkit_core::Diagnostics;
use skillkit_skills::validate_skill;

use super::bullets;

pub(super) fn cmd_validate(
    config: &SkillkitConfig,
    path: &Path,
    json: bool,
) -> skillkit_core::Result<bool> {
    let diag = validate_skill(path, &config.validation);

    if json {
        let out = serde_json::json!({
            "valid": diag.is_valid(),
            "errors": diag.errors,
            "warnings": diag.warnings,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(diag.is_valid());
    }

    println!("🔍 Validating skill: {}", path.display());
    println!();
    print!("{}", render_report(&diag));
    Ok(diag.is_valid())
}

fn render_report(diag: &Diagnostics) -> String {
    if diag.is_empty() {
        return "✅ Skill validation passed!\n".to_string();
    }
    let mut out = String::new();
    let errors = bullets("❌ Errors:", &diag.errors);
    if !errors.is_empty() {
        out.push_str(&errors);
        out.push('\n');
    }
    let warnings = bullets("⚠️  Warnings:", &diag.warnings);
    if !warnings.is_empty() {
        out.push_str(&warnings);
        out.push('\n');
    }

    if diag.is_valid() {
        out.push_str("✅ Skill validation passed!\n");
        if diag.has_warnings() {
            out.push_str("   (with warnings - consider addressing them)\n");
        }
    } else {
        out.push_str("❌ Skill validation failed. Fix errors and try again.\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_report() {
        assert_eq!(render_report(&Diagnostics::new()), "✅ Skill validation passed!\n");
    }

    #[test]
    fn test_warnings_only_still_passes() {
        let mut diag = Diagnostics::new();
        diag.warning("Description is short (12 chars).");
        let out = render_report(&diag);
        assert!(out.starts_with("⚠️  Warnings:\n   • Description is short"));
        assert!(out.contains("passed!"));
        assert!(out.contains("with warnings"));
    }

    #[test]
    fn test_errors_fail() {
        let mut diag = Diagnostics::new();
        diag.error("SKILL.md not found");
        let out = render_report(&diag);
        assert!(out.starts_with("❌ Errors:\n   • SKILL.md not found\n"));
        assert!(out.ends_with("Fix errors and try again.\n"));
    }
}
