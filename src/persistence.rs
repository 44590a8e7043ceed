//! Atomic file replacement shared by the apply workflow and the config writer.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Mode applied to every file we write: owner rw, group/other r.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Write `contents` to `path` by staging a temporary file in the same
/// directory and renaming it over the target.
pub fn write_file_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(contents)?;
    staged.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        staged
            .as_file()
            .set_permissions(std::fs::Permissions::from_mode(FILE_MODE))?;
    }

    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}
