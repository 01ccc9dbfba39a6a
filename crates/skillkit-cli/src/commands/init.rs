use std::path::Path;

use skillkit_core::SkillkitError;
use skillkit_skills::{InitStep, init_skill_with};

const NAME_RULES: &str = "   - Must be hyphen-case (e.g., 'data-analyzer')
   - Lowercase letters, digits, and hyphens only
   - Max 40 characters
   - No double hyphens";

pub(super) fn cmd_init(name: &str, path: &Path) -> skillkit_core::Result<bool> {
    println!("🚀 Initializing skill: {name}");
    println!("   Location: {}", path.display());
    println!();

    let report = match init_skill_with(name, path, |step| println!("{}", step_line(step))) {
        Ok(report) => report,
        Err(SkillkitError::InvalidName(name)) => {
            println!("❌ Invalid skill name: '{name}'");
            println!("{NAME_RULES}");
            return Ok(false);
        }
        Err(e) => return Err(e),
    };

    println!(
        "\n✅ Skill '{name}' initialized successfully at {}",
        report.skill_dir.display()
    );
    println!("\nNext steps:");
    println!("1. Edit SKILL.md to complete the TODO items and update the description");
    println!("2. Customize or delete the example files in scripts/, references/, and assets/");
    println!(
        "3. Run `skillkit validate {}` when ready to check the skill structure",
        report.skill_dir.display()
    );
    Ok(true)
}

fn step_line(step: InitStep<'_>) -> String {
    match step {
        InitStep::Directory(dir) => format!("✅ Created skill directory: {}", dir.display()),
        InitStep::File(file) => format!("✅ Created {}", file.display()),
    }
}
