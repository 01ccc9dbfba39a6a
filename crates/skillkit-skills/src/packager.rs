use std::fs::File;
use std::path::{Path, PathBuf};

use skillkit_config::{PackagingConfig, SkillkitConfig};
use skillkit_core::{Result, SkillkitError};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::validator::validate_skill;

/// Outcome of a successful `package_skill` run.
#[derive(Debug, Clone)]
pub struct PackageReport {
    pub archive_path: PathBuf,
    /// Archive member names, in the order they were written.
    pub entries: Vec<String>,
    /// Validation warnings that did not block packaging.
    pub warnings: Vec<String>,
}

/// Validate a bundle and, if it has no errors, write `<name>.<ext>` into
/// `output_dir` (default: the current directory).
///
/// Member paths are rooted at the bundle's own folder name. Dotfiles,
/// compiled artifacts and build-cache directories are left out. An I/O
/// failure while writing may leave a partial archive behind.
pub fn package_skill(
    skill_path: &Path,
    output_dir: Option<&Path>,
    config: &SkillkitConfig,
) -> Result<PackageReport> {
    if !skill_path.exists() {
        return Err(SkillkitError::NotFound(skill_path.to_path_buf()));
    }
    if !skill_path.is_dir() {
        return Err(SkillkitError::NotADirectory(skill_path.to_path_buf()));
    }
    let skill_dir = std::fs::canonicalize(skill_path)?;

    let diag = validate_skill(&skill_dir, &config.validation);
    if !diag.is_valid() {
        return Err(SkillkitError::InvalidSkill(diag));
    }

    let skill_name = skill_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| SkillkitError::NotADirectory(skill_dir.clone()))?;

    let out_dir = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            std::fs::canonicalize(dir)?
        }
        None => std::fs::canonicalize(std::env::current_dir()?)?,
    };
    let archive_path = out_dir.join(format!("{}.{}", skill_name, config.packaging.extension));

    info!(skill = %skill_name, archive = ?archive_path, "creating package");
    let entries = write_archive(&skill_dir, &skill_name, &archive_path, &config.packaging)?;
    info!(skill = %skill_name, files = entries.len(), "package written");

    Ok(PackageReport {
        archive_path,
        entries,
        warnings: diag.warnings,
    })
}

fn write_archive(
    skill_dir: &Path,
    skill_name: &str,
    archive_path: &Path,
    policy: &PackagingConfig,
) -> Result<Vec<String>> {
    let file = File::create(archive_path)?;
    let mut zip = zip::ZipWriter::new(file);
    let mut entries = Vec::new();

    let walker = WalkDir::new(skill_dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, policy));

    for entry in walker {
        let entry = entry.map_err(|e| SkillkitError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path == archive_path || is_excluded_file(path, policy) {
            debug!(?path, "skipping");
            continue;
        }

        let rel = path
            .strip_prefix(skill_dir)
            .map_err(|e| SkillkitError::Archive(e.to_string()))?;
        let member = archive_member(skill_name, rel);

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(file_mode(&entry));
        zip.start_file(member.as_str(), options)
            .map_err(|e| SkillkitError::Archive(e.to_string()))?;
        let mut src = File::open(path)?;
        std::io::copy(&mut src, &mut zip)?;

        debug!(member = %member, "added");
        entries.push(member);
    }

    zip.finish()
        .map_err(|e| SkillkitError::Archive(e.to_string()))?;
    Ok(entries)
}

/// Build-cache directories are pruned entirely (the bundle root never is).
fn is_excluded_dir(entry: &DirEntry, policy: &PackagingConfig) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && policy
            .excluded_dirs
            .iter()
            .any(|d| entry.file_name().to_string_lossy() == d.as_str())
}

fn is_excluded_file(path: &Path, policy: &PackagingConfig) -> bool {
    let hidden = path
        .file_name()
        .is_some_and(|n| n.to_string_lossy().starts_with('.'));
    let compiled = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| policy.excluded_extensions.iter().any(|x| x == ext));
    hidden || compiled
}

/// POSIX-style member path `<skill_name>/<rel>` regardless of host separator.
fn archive_member(skill_name: &str, rel: &Path) -> String {
    let mut member = String::from(skill_name);
    for component in rel.components() {
        member.push('/');
        member.push_str(&component.as_os_str().to_string_lossy());
    }
    member
}

#[cfg(unix)]
fn file_mode(entry: &DirEntry) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    entry
        .metadata()
        .map(|m| m.permissions().mode() & 0o777)
        .unwrap_or(0o644)
}

#[cfg(not(unix))]
fn file_mode(_entry: &DirEntry) -> u32 {
    0o644
}
