//! Skill identifier grammar.
//!
//! A skill name is hyphen-case: lowercase ASCII letters, digits and single
//! hyphens, starting with a letter and not ending with a hyphen, at most
//! [`MAX_NAME_LENGTH`] characters. The name must also equal the bundle's
//! folder name and the `name` field of its SKILL.md.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Longest identifier accepted.
pub const MAX_NAME_LENGTH: usize = 40;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z][a-z0-9-]*[a-z0-9]|[a-z])$").expect("static regex")
});

/// One way a candidate identifier breaks the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameViolation {
    /// Characters or shape outside `^[a-z][a-z0-9-]*[a-z0-9]$`.
    BadPattern,
    /// Contains `--`.
    DoubleHyphen,
    /// Longer than [`MAX_NAME_LENGTH`]; carries the actual length.
    TooLong(usize),
}

impl fmt::Display for NameViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameViolation::BadPattern => write!(f, "must be hyphen-case (e.g., 'my-skill')"),
            NameViolation::DoubleHyphen => write!(f, "contains double hyphens"),
            NameViolation::TooLong(len) => {
                write!(f, "too long: {len} chars (max {MAX_NAME_LENGTH})")
            }
        }
    }
}

/// Every rule `name` violates, in rule order. Empty means valid.
pub fn name_violations(name: &str) -> Vec<NameViolation> {
    let mut violations = Vec::new();
    if !NAME_PATTERN.is_match(name) {
        violations.push(NameViolation::BadPattern);
    }
    if name.contains("--") {
        violations.push(NameViolation::DoubleHyphen);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LENGTH {
        violations.push(NameViolation::TooLong(len));
    }
    violations
}

/// Whether `name` is an acceptable skill identifier.
pub fn is_valid_skill_name(name: &str) -> bool {
    name_violations(name).is_empty()
}

/// Render an identifier as a title: each hyphen-delimited word capitalized.
///
/// `data-analyzer` becomes `Data Analyzer`.
pub fn title_case(name: &str) -> String {
    name.split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_hyphen_case() {
        for name in ["a", "data-analyzer", "pdf2text", "x1", "my-api-helper-v2"] {
            assert!(is_valid_skill_name(name), "{name} should be valid");
        }
    }

    #[test]
    fn test_accepts_exactly_max_length() {
        let name = "a".repeat(MAX_NAME_LENGTH);
        assert!(is_valid_skill_name(&name));
    }

    #[test]
    fn test_rejects_bad_characters() {
        for name in ["Bad_Name", "UPPER", "has space", "under_score", "dot.name", "ünï"] {
            assert_eq!(name_violations(name).first(), Some(&NameViolation::BadPattern), "{name}");
        }
    }

    #[test]
    fn test_rejects_bad_shape() {
        for name in ["", "1abc", "-lead", "trail-", "-"] {
            assert!(!is_valid_skill_name(name), "{name} should be invalid");
        }
    }

    #[test]
    fn test_double_hyphen_is_its_own_violation() {
        // The pattern alone allows inner hyphens, so `--` is caught separately.
        assert_eq!(name_violations("my--skill"), vec![NameViolation::DoubleHyphen]);
    }

    #[test]
    fn test_too_long_reports_length() {
        let name = "a".repeat(41);
        assert_eq!(name_violations(&name), vec![NameViolation::TooLong(41)]);
    }

    #[test]
    fn test_violations_accumulate() {
        let name = format!("{}--{}", "a".repeat(30), "B".repeat(10));
        let v = name_violations(&name);
        assert!(v.contains(&NameViolation::BadPattern));
        assert!(v.contains(&NameViolation::DoubleHyphen));
        assert!(v.contains(&NameViolation::TooLong(42)));
    }

    #[test]
    fn test_title_case_capitalizes_each_word() {
        assert_eq!(title_case("data-analyzer"), "Data Analyzer");
        assert_eq!(title_case("a"), "A");
        assert_eq!(title_case("pdf2text-tool"), "Pdf2text Tool");
    }
}
