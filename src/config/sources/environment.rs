//! Environment source: `<PREFIX>_KEY` variables, `__` for nesting.

use config::{Config, ConfigError, Environment, Map};

/// Separator between nested key segments in variable names
pub const NESTING_SEPARATOR: &str = "__";

/// Capture matching variables into a layer. `vars: None` reads the process
/// environment; tests pass an explicit map.
pub fn load(prefix: &str, vars: Option<Map<String, String>>) -> Result<Config, ConfigError> {
    Config::builder()
        .add_source(
            Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator(NESTING_SEPARATOR)
                .try_parsing(true)
                .source(vars),
        )
        .build()
}
