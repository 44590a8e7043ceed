//! git-pitch: repository-local configuration
//!
//! Materializes a default configuration file inside a repository's `.git`
//! directory, asking before it replaces an existing one, and resolves layered
//! settings (defaults, file, environment, explicit) for the rest of the tool.

pub mod apply;
pub mod cli;
pub mod config;
pub mod confirm;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod workspace;
