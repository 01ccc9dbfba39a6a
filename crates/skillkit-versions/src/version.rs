use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;
use serde::{Deserialize, Serialize};

static TRIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)").expect("static regex"));

/// How an installed version relates to the latest published one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    UpToDate,
    PatchBehind,
    MinorBehind,
    MajorBehind,
    NotInstalled,
    Unknown,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::UpToDate => "UP_TO_DATE",
            Verdict::PatchBehind => "PATCH_BEHIND",
            Verdict::MinorBehind => "MINOR_BEHIND",
            Verdict::MajorBehind => "MAJOR_BEHIND",
            Verdict::NotInstalled => "NOT_INSTALLED",
            Verdict::Unknown => "UNKNOWN",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Verdict::UpToDate | Verdict::PatchBehind => "✅",
            Verdict::MinorBehind => "⚠️ ",
            Verdict::MajorBehind => "🚨",
            Verdict::NotInstalled => "❌",
            Verdict::Unknown => "❓",
        }
    }

    /// Verdicts that make a single-package check exit non-zero.
    pub fn is_failure(&self) -> bool {
        matches!(self, Verdict::MajorBehind | Verdict::NotInstalled)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leniently read `major.minor.patch` from a version string.
///
/// Range prefixes (`v^~>=<`) are stripped and anything after the triple
/// (pre-release tags, `.post1`, build metadata) is ignored. Returns `None`
/// when no full triple starts the string.
pub fn parse_version(raw: &str) -> Option<Version> {
    let trimmed = raw
        .trim()
        .trim_start_matches(['v', '^', '~', '>', '=', '<']);
    let caps = TRIPLE.captures(trimmed)?;
    let major = caps[1].parse().ok()?;
    let minor = caps[2].parse().ok()?;
    let patch = caps[3].parse().ok()?;
    Some(Version::new(major, minor, patch))
}

/// Classify an installed/latest pair.
///
/// The triples compare field by field; an installed version at or ahead of
/// the latest one is up to date.
pub fn classify(installed: Option<&str>, latest: Option<&str>) -> Verdict {
    let Some(installed) = installed.filter(|s| !s.trim().is_empty()) else {
        return Verdict::NotInstalled;
    };
    let Some(latest) = latest.filter(|s| !s.trim().is_empty()) else {
        return Verdict::Unknown;
    };
    let (Some(inst), Some(lat)) = (parse_version(installed), parse_version(latest)) else {
        return Verdict::Unknown;
    };

    if inst >= lat {
        Verdict::UpToDate
    } else if inst.major < lat.major {
        Verdict::MajorBehind
    } else if inst.minor < lat.minor {
        Verdict::MinorBehind
    } else {
        Verdict::PatchBehind
    }
}
