//! Error types for git-pitch.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration resolver errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    #[error("Failed to read environment overrides: {0}")]
    Environment(#[source] config::ConfigError),

    #[error("Failed to merge configuration layers: {0}")]
    Merge(#[source] config::ConfigError),

    #[error("Failed to write configuration file {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No configuration file was resolved or named; nothing to write to")]
    NoTargetFile,

    #[error("Configuration file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Invalid configuration key '{key}': {source}")]
    InvalidKey {
        key: String,
        #[source]
        source: config::ConfigError,
    },

    #[error("Invalid value for '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: config::ConfigError,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),
}

/// Yes/no prompt errors
#[derive(Debug, Error)]
pub enum ConfirmError {
    /// The interactive renderer could not start or run
    #[error("interactive prompt failed: {0}")]
    Render(#[source] std::io::Error),

    #[error("failed to read answer: {0}")]
    Input(#[source] std::io::Error),
}

impl From<ConfirmError> for PitchError {
    fn from(err: ConfirmError) -> Self {
        match err {
            ConfirmError::Render(e) | ConfirmError::Input(e) => PitchError::InputError(e),
        }
    }
}

/// Command-level errors, reported once at the CLI boundary
#[derive(Debug, Error)]
pub enum PitchError {
    #[error("not a git repository ({0}). Please run 'git init' first")]
    NotAVersionControlledDirectory(PathBuf),

    #[error("failed to get confirmation: {0}")]
    InputError(#[source] std::io::Error),

    #[error("failed to create configuration file {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(String),
}
