//! CLI parse: clap types for git-pitch. No behavior; definitions only.

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// git-pitch CLI
#[derive(Parser, Debug)]
#[command(name = "git-pitch")]
#[command(about = "git-pitch CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Working tree root
    #[arg(long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Disable logging
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a default configuration file in the .git directory
    #[command(long_about = "Creates a default git-pitch configuration file in the .git directory.

This command will:
- Check if the current directory is a git repository
- Create a default configuration file in .git/
- Ask for confirmation if the file already exists")]
    Apply {
        /// Force overwrite existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

/// `<version> (<commit>) <date>`; commit and date are stamped at build time.
pub fn long_version() -> String {
    format!(
        "{} ({}) {}",
        env!("CARGO_PKG_VERSION"),
        option_env!("GIT_PITCH_COMMIT").unwrap_or("none"),
        option_env!("GIT_PITCH_BUILD_DATE").unwrap_or("unknown"),
    )
}

/// Parse process arguments, exiting with clap's message on error.
pub fn parse_args() -> Cli {
    try_parse_args_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
}

pub fn try_parse_args_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Cli::command()
        .version(long_version())
        .try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}
