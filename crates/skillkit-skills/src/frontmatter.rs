//! SKILL.md parsing.
//!
//! Parsing is two-phase: [`split_front_matter`] locates the delimiter lines
//! and separates the front-matter block from the body, then
//! [`FrontMatter::parse`] reads the block as ordered `key: value` pairs.
//! Validation code works on the typed result and never re-reads raw text.
//!
//! ```text
//! ---
//! name: data-analyzer
//! description: Analyzes CSV data files and produces summary statistics.
//! license: MIT
//! ---
//!
//! # Data Analyzer
//! ...
//! ```

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// A line consisting solely of this opens and closes the front matter.
pub const DELIMITER: &str = "---";

static FIELD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_-]+):(.*)$").expect("static regex"));

/// Block-scalar indicators whose content follows on indented lines.
const BLOCK_SCALARS: &[&str] = &[">", "|", ">-", "|-", ">+", "|+"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrontMatterError {
    #[error("SKILL.md must start with YAML frontmatter (---)")]
    Missing,
    #[error("SKILL.md frontmatter not properly closed with ---")]
    Unclosed,
}

/// Split a SKILL.md into its front-matter block and body.
///
/// The first line must be the delimiter; the block runs until the next
/// delimiter line. Both returned slices borrow from `content`.
pub fn split_front_matter(content: &str) -> Result<(&str, &str), FrontMatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let first = lines.next().ok_or(FrontMatterError::Missing)?;
    if !is_delimiter(first) {
        return Err(FrontMatterError::Missing);
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if is_delimiter(line) {
            let block = &content[start..offset];
            let body = &content[offset + line.len()..];
            return Ok((block, body));
        }
        offset += line.len();
    }
    Err(FrontMatterError::Unclosed)
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Parsed front-matter fields plus the keys outside the allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: Vec<(String, String)>,
    unrecognized: Vec<String>,
}

impl FrontMatter {
    /// Parse a front-matter block. Keys not in `allowed` are still kept in
    /// [`fields`](Self::fields) but are also listed in
    /// [`unrecognized`](Self::unrecognized), once each, in first-seen order.
    pub fn parse(block: &str, allowed: &[String]) -> Self {
        let mut fields: Vec<(String, String)> = Vec::new();
        let mut unrecognized: Vec<String> = Vec::new();
        // Index of the field that continuation lines append to.
        let mut current: Option<usize> = None;

        for raw in block.lines() {
            if raw.trim().is_empty() || raw.trim_start().starts_with('#') {
                continue;
            }

            if let Some(caps) = FIELD_LINE.captures(raw) {
                let key = caps[1].to_string();
                let mut value = caps[2].trim().to_string();
                if BLOCK_SCALARS.contains(&value.as_str()) {
                    value.clear();
                }

                if !allowed.iter().any(|a| a == &key) && !unrecognized.contains(&key) {
                    unrecognized.push(key.clone());
                }

                if fields.iter().any(|(k, _)| k == &key) {
                    // First occurrence wins.
                    current = None;
                } else {
                    fields.push((key, value));
                    current = Some(fields.len() - 1);
                }
                continue;
            }

            let starts_indented = raw.starts_with([' ', '\t']) || raw.starts_with("- ");
            if let (true, Some(idx)) = (starts_indented, current) {
                let value = &mut fields[idx].1;
                if !value.is_empty() {
                    value.push(' ');
                }
                value.push_str(raw.trim());
            }
        }

        for (_, value) in &mut fields {
            *value = unquote(value);
        }

        Self {
            fields,
            unrecognized,
        }
    }

    /// Value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All fields in document order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Keys outside the allow-list.
    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }
}

/// A SKILL.md split and parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDocument {
    pub front_matter: FrontMatter,
    pub body: String,
}

impl SkillDocument {
    pub fn parse(content: &str, allowed: &[String]) -> Result<Self, FrontMatterError> {
        let (block, body) = split_front_matter(content)?;
        Ok(Self {
            front_matter: FrontMatter::parse(block, allowed),
            body: body.to_string(),
        })
    }
}

/// Remove surrounding quotes from a YAML value.
fn unquote(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')))
    {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}
