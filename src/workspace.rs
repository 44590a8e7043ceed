//! Workspace discovery: locate the git metadata directory for a working tree.

use crate::error::PitchError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the version-control metadata entry inside a working tree.
pub const METADATA_DIR_NAME: &str = ".git";

/// Resolve the metadata directory for `workdir`.
///
/// A `.git` directory is returned as-is. A `.git` *file* (linked worktrees,
/// submodules) is followed through its `gitdir:` line.
pub fn find_metadata_dir(workdir: &Path) -> Result<PathBuf, PitchError> {
    let candidate = workdir.join(METADATA_DIR_NAME);

    if candidate.is_dir() {
        return Ok(candidate);
    }

    if candidate.is_file() {
        if let Some(target) = read_gitdir_pointer(&candidate, workdir) {
            if target.is_dir() {
                debug!(gitdir = %target.display(), "Following .git file pointer");
                return Ok(target);
            }
        }
    }

    Err(PitchError::NotAVersionControlledDirectory(
        workdir.to_path_buf(),
    ))
}

fn read_gitdir_pointer(pointer_file: &Path, workdir: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(pointer_file).ok()?;
    let line = contents
        .lines()
        .find_map(|line| line.trim().strip_prefix("gitdir:"))?;
    let target = PathBuf::from(line.trim());
    if target.as_os_str().is_empty() {
        return None;
    }
    if target.is_absolute() {
        Some(target)
    } else {
        Some(workdir.join(target))
    }
}
