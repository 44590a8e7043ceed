//! Apply workflow: materialize the default configuration file
//!
//! Writes the canonical configuration into the repository's git metadata
//! directory, asking before it replaces an existing file unless forced.

use crate::confirm::YesNoAsker;
use crate::error::PitchError;
use crate::persistence::write_file_atomic;
use crate::workspace::find_metadata_dir;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the configuration inside the metadata directory
pub const CONFIG_FILE_NAME: &str = "git-pitch-config.yaml";

/// Question asked before replacing an existing configuration
pub const OVERWRITE_QUESTION: &str =
    "Configuration file already exists. Do you want to overwrite it?";

/// Canonical default configuration
pub const DEFAULT_CONFIG: &str = r#"# git-pitch configuration file
# This file contains default settings for git-pitch

# Default configuration settings
default:
  enabled: true
  auto_commit: false
  template: "default"

# Template settings
templates:
  default:
    title: "Git Pitch Template"
    description: "Default template for git-pitch presentations"
"#;

/// What the apply workflow did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// No file existed; the default was written without asking
    Created(PathBuf),
    /// An existing file was replaced (forced or confirmed)
    Overwritten(PathBuf),
    /// The user declined; the existing file is untouched
    Declined(PathBuf),
}

impl ApplyOutcome {
    pub fn path(&self) -> &Path {
        match self {
            ApplyOutcome::Created(p) | ApplyOutcome::Overwritten(p) | ApplyOutcome::Declined(p) => p,
        }
    }

    pub fn wrote_file(&self) -> bool {
        !matches!(self, ApplyOutcome::Declined(_))
    }
}

/// Path the apply workflow targets for a working tree.
pub fn config_path(workdir: &Path) -> Result<PathBuf, PitchError> {
    Ok(find_metadata_dir(workdir)?.join(CONFIG_FILE_NAME))
}

/// Write the default configuration for the repository at `workdir`.
///
/// The asker is consulted only when the target exists and `force` is off.
pub fn apply_default_config(
    workdir: &Path,
    force: bool,
    asker: &mut dyn YesNoAsker,
) -> Result<ApplyOutcome, PitchError> {
    let path = config_path(workdir)?;
    let existed = path.exists();

    if existed && !force {
        debug!(path = %path.display(), "Configuration exists, asking before overwrite");
        let decision = asker.ask(OVERWRITE_QUESTION)?;
        if !decision.is_accepted() {
            info!(
                path = %path.display(),
                finalized = decision.finalized,
                "Overwrite declined"
            );
            return Ok(ApplyOutcome::Declined(path));
        }
    }

    write_file_atomic(&path, DEFAULT_CONFIG.as_bytes()).map_err(|source| {
        PitchError::WriteFailure {
            path: path.clone(),
            source,
        }
    })?;
    info!(path = %path.display(), overwritten = existed, "Configuration written");

    if existed {
        Ok(ApplyOutcome::Overwritten(path))
    } else {
        Ok(ApplyOutcome::Created(path))
    }
}
