use std::path::Path;

use skillkit_config::SkillkitConfig;
use skillkit_core::SkillkitError;
use skillkit_skills::package_skill;

use super::bullets;

pub(super) fn cmd_package(
    config: &SkillkitConfig,
    path: &Path,
    output: Option<&Path>,
) -> skillkit_core::Result<bool> {
    println!("📦 Packaging skill: {}", path.display());
    if let Some(out) = output {
        println!("   Output directory: {}", out.display());
    }
    println!();
    println!("🔍 Validating skill...");

    let report = match package_skill(path, output, config) {
        Ok(report) => report,
        Err(SkillkitError::InvalidSkill(diag)) => {
            println!();
            print!("{}", bullets("❌ Validation errors:", &diag.errors));
            println!("\n❌ Fix validation errors before packaging.");
            return Ok(false);
        }
        Err(e) => return Err(e),
    };

    if !report.warnings.is_empty() {
        println!();
        print!("{}", bullets("⚠️  Validation warnings:", &report.warnings));
        println!("\n   Proceeding with packaging despite warnings...");
    }
    println!("✅ Validation passed\n");

    let file_name = report
        .archive_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!("📦 Creating package: {file_name}");
    for entry in &report.entries {
        println!("   Added: {entry}");
    }
    println!(
        "\n✅ Successfully packaged skill to: {}",
        report.archive_path.display()
    );
    Ok(true)
}
