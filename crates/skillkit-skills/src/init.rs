use std::path::{Path, PathBuf};

use skillkit_core::{Result, SkillkitError};
use tracing::{debug, info};

use crate::name::{is_valid_skill_name, title_case};
use crate::templates::{RESOURCE_TEMPLATES, SKILL_TEMPLATE, render};
use crate::SKILL_FILE;

/// What `init_skill` created.
#[derive(Debug, Clone)]
pub struct InitReport {
    /// The new bundle directory, `parent/<name>`.
    pub skill_dir: PathBuf,
    /// Files written, relative to `skill_dir`, in creation order.
    pub created: Vec<PathBuf>,
}

/// One completed step of [`init_skill_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep<'a> {
    /// The bundle directory itself.
    Directory(&'a Path),
    /// A file, relative to the bundle directory.
    File(&'a Path),
}

/// Create `parent/<skill_name>/` with a SKILL.md skeleton and one example
/// file in each resource directory.
///
/// Fails without touching the disk if the name is invalid or the target
/// already exists. A filesystem error midway aborts the run and leaves
/// whatever was already created in place.
pub fn init_skill(skill_name: &str, parent: &Path) -> Result<InitReport> {
    init_skill_with(skill_name, parent, |_| {})
}

/// Like [`init_skill`], calling `on_step` as soon as each directory or file
/// exists on disk, so a failure midway still leaves a trace of what was made.
pub fn init_skill_with<F>(skill_name: &str, parent: &Path, mut on_step: F) -> Result<InitReport>
where
    F: FnMut(InitStep<'_>),
{
    if !is_valid_skill_name(skill_name) {
        return Err(SkillkitError::InvalidName(skill_name.to_string()));
    }

    let skill_title = title_case(skill_name);
    let skill_dir = parent.join(skill_name);

    if skill_dir.exists() {
        return Err(SkillkitError::AlreadyExists(skill_dir));
    }

    std::fs::create_dir_all(parent).map_err(|e| io_at(&e, parent))?;
    std::fs::create_dir(&skill_dir).map_err(|e| io_at(&e, &skill_dir))?;
    info!(skill = %skill_name, path = ?skill_dir, "created skill directory");
    on_step(InitStep::Directory(&skill_dir));

    let mut created = Vec::new();

    let skill_md = skill_dir.join(SKILL_FILE);
    std::fs::write(&skill_md, render(SKILL_TEMPLATE, skill_name, &skill_title))
        .map_err(|e| io_at(&e, &skill_md))?;
    debug!(path = ?skill_md, "wrote SKILL.md template");
    created.push(PathBuf::from(SKILL_FILE));
    on_step(InitStep::File(Path::new(SKILL_FILE)));

    for resource in RESOURCE_TEMPLATES {
        let dir = skill_dir.join(resource.dir);
        std::fs::create_dir(&dir).map_err(|e| io_at(&e, &dir))?;

        let file = dir.join(resource.file_name);
        std::fs::write(&file, render(resource.content, skill_name, &skill_title))
            .map_err(|e| io_at(&e, &file))?;
        if resource.executable {
            make_executable(&file)?;
        }
        debug!(path = ?file, "wrote example resource");
        let rel = Path::new(resource.dir).join(resource.file_name);
        on_step(InitStep::File(&rel));
        created.push(rel);
    }

    info!(skill = %skill_name, files = created.len(), "skill initialized");
    Ok(InitReport { skill_dir, created })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .map_err(|e| io_at(&e, path))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Attach the failing path to an io error.
fn io_at(e: &std::io::Error, path: &Path) -> SkillkitError {
    SkillkitError::Io(std::io::Error::new(
        e.kind(),
        format!("{}: {}", path.display(), e),
    ))
}
