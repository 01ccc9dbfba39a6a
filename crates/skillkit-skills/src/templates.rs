//! Embedded templates for `skillkit init`.
//!
//! Templates are immutable constants with named slots: `{skill_name}` and
//! `{skill_title}`. [`render`] fills them.

/// Skeleton SKILL.md. The description is guidance text without a
/// placeholder marker, so a fresh bundle has no validation errors; the body
/// carries the `[TODO: ...]` sections the author still has to complete.
pub const SKILL_TEMPLATE: &str = r#"---
name: {skill_name}
description: Replace this text with what {skill_title} does and when to use it, including the specific scenarios, file types, or tasks that should trigger it.
---

# {skill_title}

## Overview

[TODO: 1-2 sentences explaining what this skill enables]

## Structuring This Skill

[TODO: Choose the structure that best fits this skill's purpose. Common patterns:

1. **Workflow-Based** (best for sequential processes):
   - Step-by-step instructions
   - Ordered operations
   - Checkpoints and validation

2. **Reference-Based** (best for domain knowledge):
   - Key concepts and definitions
   - Common patterns and examples
   - Lookup tables or schemas

3. **Tool-Based** (best for specific file/API operations):
   - Core operations
   - Input/output formats
   - Error handling

Delete this section once you've chosen and implemented your structure.]

## [Section 1]

[TODO: Add your content]

## [Section 2]

[TODO: Add your content]

## Bundled Resources

### Scripts

- `scripts/example_script.sh` - [TODO: Describe what this script does]

### References

- `references/example_reference.md` - [TODO: Describe what this reference contains]

### Assets

- `assets/example_asset.txt` - [TODO: Describe what this asset is for]

[TODO: Delete any resource sections that aren't needed for this skill]
"#;

pub const EXAMPLE_SCRIPT: &str = r#"#!/usr/bin/env bash
# Example script for {skill_name}. Replace with actual functionality,
# or delete this file if the skill needs no scripts.
set -euo pipefail

echo "Example script executed successfully!"
echo "Arguments: $*"
"#;

pub const EXAMPLE_REFERENCE: &str = r#"# Example Reference

This is a placeholder reference file for {skill_title}. Replace with actual documentation.

## Section 1

Reference content goes here.

## Section 2

More reference content.

---

Delete this file if not needed for your skill.
"#;

pub const EXAMPLE_ASSET: &str = r#"Example asset file.

This is a placeholder asset. Replace with actual assets like:
- Templates
- Configuration files
- Sample data
- Images (as actual image files)

Delete this file if not needed for your skill.
"#;

/// A file seeded into a resource directory.
#[derive(Debug, Clone, Copy)]
pub struct ResourceTemplate {
    /// Resource directory, e.g. `scripts`.
    pub dir: &'static str,
    pub file_name: &'static str,
    pub content: &'static str,
    pub executable: bool,
}

/// One example file per resource directory, in creation order.
pub const RESOURCE_TEMPLATES: &[ResourceTemplate] = &[
    ResourceTemplate {
        dir: "scripts",
        file_name: "example_script.sh",
        content: EXAMPLE_SCRIPT,
        executable: true,
    },
    ResourceTemplate {
        dir: "references",
        file_name: "example_reference.md",
        content: EXAMPLE_REFERENCE,
        executable: false,
    },
    ResourceTemplate {
        dir: "assets",
        file_name: "example_asset.txt",
        content: EXAMPLE_ASSET,
        executable: false,
    },
];

/// Fill the `{skill_name}` and `{skill_title}` slots.
pub fn render(template: &str, skill_name: &str, skill_title: &str) -> String {
    template
        .replace("{skill_name}", skill_name)
        .replace("{skill_title}", skill_title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_both_slots() {
        let out = render(SKILL_TEMPLATE, "data-analyzer", "Data Analyzer");
        assert!(out.starts_with("---\nname: data-analyzer\n"));
        assert!(out.contains("# Data Analyzer"));
        assert!(!out.contains("{skill_name}"));
        assert!(!out.contains("{skill_title}"));
    }

    #[test]
    fn test_template_description_has_no_placeholder_and_is_long_enough() {
        let out = render(SKILL_TEMPLATE, "x", "X");
        let line = out
            .lines()
            .find(|l| l.starts_with("description:"))
            .unwrap();
        let desc = line.trim_start_matches("description:").trim();
        assert!(!desc.contains("[TODO"));
        assert!(desc.chars().count() >= 50);
    }

    #[test]
    fn test_template_mentions_three_structures() {
        assert!(SKILL_TEMPLATE.contains("Workflow-Based"));
        assert!(SKILL_TEMPLATE.contains("Reference-Based"));
        assert!(SKILL_TEMPLATE.contains("Tool-Based"));
    }

    #[test]
    fn test_only_the_script_is_executable() {
        let exec: Vec<&str> = RESOURCE_TEMPLATES
            .iter()
            .filter(|t| t.executable)
            .map(|t| t.dir)
            .collect();
        assert_eq!(exec, vec!["scripts"]);
    }
}
