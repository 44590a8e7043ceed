//! Search path: ordered candidate directories for the configuration file.

use directories::BaseDirs;
use std::path::{Path, PathBuf};

use crate::workspace::find_metadata_dir;

/// Fixed system-wide configuration directory
pub const SYSTEM_CONFIG_DIR: &str = "/etc/git-pitch";

/// One candidate directory and whether it existed when the path was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDir {
    pub path: PathBuf,
    pub exists: bool,
}

/// Ordered, precedence-encoding list of directories. Earlier wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<SearchDir>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directory. Duplicates keep their first position.
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if self.dirs.iter().all(|d| d.path != path) {
            let exists = path.is_dir();
            self.dirs.push(SearchDir { path, exists });
        }
        self
    }

    /// Project metadata directory (when inside a repository), home directory,
    /// system directory, then the working directory itself.
    pub fn standard(workdir: &Path, home: Option<&Path>) -> Self {
        let mut search = Self::new();
        if let Ok(metadata_dir) = find_metadata_dir(workdir) {
            search = search.with_dir(metadata_dir);
        }
        if let Some(home) = home {
            search = search.with_dir(home);
        }
        search
            .with_dir(SYSTEM_CONFIG_DIR)
            .with_dir(workdir)
    }

    /// Standard search path rooted at `workdir`, with the user's home directory.
    pub fn discover_from(workdir: &Path) -> Self {
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Self::standard(workdir, home.as_deref())
    }

    pub fn dirs(&self) -> &[SearchDir] {
        &self.dirs
    }

    /// First `<dir>/<stem>.<ext>` that is a file, scanning existing
    /// directories in order and extensions in order within each.
    pub fn find_file(&self, stem: &str, extensions: &[&str]) -> Option<PathBuf> {
        self.dirs
            .iter()
            .filter(|d| d.exists)
            .flat_map(|d| {
                extensions
                    .iter()
                    .map(move |ext| d.path.join(format!("{}.{}", stem, ext)))
            })
            .find(|candidate| candidate.is_file())
    }

    /// Where a new file goes when none was found: the first directory that
    /// existed, else the first directory listed.
    pub fn write_target(&self, file_name: &str) -> Option<PathBuf> {
        self.dirs
            .iter()
            .find(|d| d.exists)
            .or_else(|| self.dirs.first())
            .map(|d| d.path.join(file_name))
    }
}
