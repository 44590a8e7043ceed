//! git-pitch CLI Binary
//!
//! Command-line entry point: resolves configuration, sets up logging, and
//! dispatches the subcommand.

use git_pitch::cli::{map_error, parse_args, Cli, RunContext};
use git_pitch::config::{ConfigResolver, SearchPath};
use git_pitch::error::ConfigError;
use git_pitch::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info, warn};

fn main() {
    let cli = parse_args();

    let resolved = resolve_config(&cli);
    let logging_config = build_logging_config(&cli, resolved.as_ref().ok());

    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    match &resolved {
        Ok(resolver) => info!(
            config_file = ?resolver.config_file(),
            "git-pitch starting"
        ),
        Err(e) => warn!("Continuing with default settings: {}", e),
    }

    let context = RunContext::new(cli.workspace.clone());
    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<ConfigResolver, ConfigError> {
    let mut resolver = ConfigResolver::new(SearchPath::discover_from(&cli.workspace));
    resolver.initialize()?;
    Ok(resolver)
}

/// Build logging configuration from CLI args and the resolved settings.
/// Precedence: CLI flags override environment override config file override defaults.
fn build_logging_config(cli: &Cli, resolver: Option<&ConfigResolver>) -> LoggingConfig {
    let mut config = resolver
        .map(LoggingConfig::from_resolver)
        .unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
