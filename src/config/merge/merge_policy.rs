//! Merge rules: defaults < file < environment < explicit overrides.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Value};

/// Keyed values where a later write to the same key replaces the earlier one
/// but keeps insertion order for everything else.
#[derive(Debug, Clone, Default)]
pub struct KeyedValues(Vec<(String, Value)>);

impl KeyedValues {
    pub fn upsert(&mut self, key: &str, value: Value) {
        self.0.retain(|(k, _)| k != key);
        self.0.push((key.to_string(), value));
    }

    /// Insert only when no value is registered for `key` yet.
    pub fn insert_if_absent(&mut self, key: &str, value: Value) {
        if self.0.iter().all(|(k, _)| k != key) {
            self.0.push((key.to_string(), value));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.0.iter()
    }
}

/// Precedence layer a resolved value came from, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Default,
    File,
    Environment,
    Explicit,
}

/// Built-in defaults registered by every resolver before the file loads.
pub fn builtin_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("debug", Value::from(false)),
        ("timeout", Value::from(30i64)),
        ("output_format", Value::from("text")),
        ("log.level", Value::from("warn")),
        ("log.format", Value::from("text")),
        ("log.color", Value::from(true)),
    ]
}

/// Create a Config builder with the given defaults applied.
pub fn builder_with_defaults(
    defaults: &KeyedValues,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    defaults
        .iter()
        .try_fold(Config::builder(), |builder, (key, value)| {
            builder.set_default(key.as_str(), value.clone())
        })
}

/// Stack the layers in precedence order. `defaults: None` yields the view
/// used for `is_set`: only values somebody actually supplied.
pub fn layered(
    defaults: Option<&KeyedValues>,
    file: &Config,
    env: &Config,
    overrides: &KeyedValues,
) -> Result<Config, ConfigError> {
    let builder = match defaults {
        Some(defaults) => builder_with_defaults(defaults)?,
        None => Config::builder(),
    };

    overrides
        .iter()
        .try_fold(
            builder.add_source(file.clone()).add_source(env.clone()),
            |builder, (key, value)| builder.set_override(key.as_str(), value.clone()),
        )?
        .build()
}
