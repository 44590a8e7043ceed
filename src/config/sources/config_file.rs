//! Config file source: the first `<name>.yaml` / `<name>.yml` on the search path.

use crate::config::paths::SearchPath;
use crate::error::ConfigError;
use config::{Config, File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions tried in each search directory, in order.
pub const EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Locate the highest-precedence config file, if any.
pub fn find(search_path: &SearchPath, name: &str) -> Option<PathBuf> {
    let found = search_path.find_file(name, EXTENSIONS);
    debug!(
        name,
        found = ?found.as_ref().map(|p| p.display().to_string()),
        "Config file lookup"
    );
    found
}

/// Load a YAML file into its own layer. Any failure is a read failure:
/// the caller has already established that the file exists.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    Config::builder()
        .add_source(File::from(path).format(FileFormat::Yaml).required(true))
        .build()
        .map_err(|source| ConfigError::ReadFailure {
            path: path.to_path_buf(),
            source,
        })
}
