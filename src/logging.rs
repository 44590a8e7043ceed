//! Logging System
//!
//! Structured logging using the `tracing` crate. Logs go to stderr (stdout
//! carries command output) or to a file, as text or JSON.
//!
//! Priority order (highest to lowest):
//! 1. CLI flags (`--quiet`, `--verbose`, `--log-level`, `--log-format`)
//! 2. Environment variables (`GIT_PITCH_LOG__LEVEL`, `GIT_PITCH_DEBUG`, ...)
//! 3. Configuration file (`log:` section, top-level `debug`)
//! 4. Defaults

use crate::config::ConfigResolver;
use crate::error::PitchError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Disable logging entirely
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (when output is "file")
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Colored output (text format on stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Read the `log` section. A top-level `debug: true` raises the level
    /// only when it comes from a higher layer than `log.level`.
    pub fn from_resolver(resolver: &ConfigResolver) -> Self {
        let mut config = resolver
            .unmarshal_key::<LoggingConfig>("log")
            .unwrap_or_default();
        if resolver.get_bool("debug")
            && resolver.layer_of("debug") > resolver.layer_of("log.level")
        {
            config.level = "debug".to_string();
        }
        config
    }
}

/// Output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Destination {
    Stderr,
    File,
}

/// Initialize the global subscriber. Calling it again is an error, not a panic.
pub fn init_logging(config: &LoggingConfig) -> Result<(), PitchError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let json = determine_format(config)? == "json";
    let destination = parse_destination(&config.output)?;

    let base_subscriber = Registry::default().with(filter);

    let result = match (json, destination) {
        (true, Destination::File) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(Mutex::new(open_log_file(config)?)),
            )
            .try_init(),
        (true, Destination::Stderr) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        (false, Destination::File) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(Mutex::new(open_log_file(config)?)),
            )
            .try_init(),
        (false, Destination::Stderr) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| PitchError::Logging(format!("Failed to install subscriber: {}", e)))
}

fn open_log_file(config: &LoggingConfig) -> Result<std::fs::File, PitchError> {
    let log_file = config.file.clone().ok_or_else(|| {
        PitchError::Logging("Log output is 'file' but no log file path is set".to_string())
    })?;

    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PitchError::Logging(format!("Failed to create log directory: {}", e))
            })?;
        }
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| {
            PitchError::Logging(format!("Failed to open log file {:?}: {}", log_file, e))
        })
}

/// Build the level filter plus per-module directives
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, PitchError> {
    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::try_new(&config.level)
        .map_err(|e| PitchError::Logging(format!("Invalid log level '{}': {}", config.level, e)))?;

    for (module, module_level) in &config.modules {
        let directive = format!("{}={}", module, module_level);
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| PitchError::Logging(format!("Invalid log directive: {}", e)))?,
        );
    }

    Ok(filter)
}

fn determine_format(config: &LoggingConfig) -> Result<&str, PitchError> {
    match config.format.as_str() {
        "json" | "text" => Ok(config.format.as_str()),
        other => Err(PitchError::Logging(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

fn parse_destination(output: &str) -> Result<Destination, PitchError> {
    match output {
        "stderr" => Ok(Destination::Stderr),
        "file" => Ok(Destination::File),
        _ => Err(PitchError::Logging(format!(
            "Invalid log output: {} (must be 'stderr' or 'file')",
            output
        ))),
    }
}
