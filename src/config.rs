//! Configuration System
//!
//! Layered settings store for git-pitch. Values resolve with precedence
//! defaults < file < environment < explicit `set`. The file is the first
//! `git-pitch-config.yaml` found along a [`SearchPath`]: the repository's
//! `.git` directory, the home directory, `/etc/git-pitch`, then the working
//! directory.
//!
//! A resolver is an ordinary value: build one over an explicit search path
//! and environment map to keep tests hermetic.

use crate::error::ConfigError;
use crate::persistence::write_file_atomic;
use config::{Config, Map};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod merge;
mod paths;
mod sources;

pub use config::Value;
pub use merge::merge_policy::Layer;
pub use paths::{SearchDir, SearchPath, SYSTEM_CONFIG_DIR};

use merge::merge_policy::{self, KeyedValues};
use sources::{config_file, environment};

/// Base name of the configuration file (without extension)
pub const CONFIG_NAME: &str = "git-pitch-config";

/// Prefix of environment variables mapped onto configuration keys
pub const ENV_PREFIX: &str = "GIT_PITCH";

/// Layered configuration resolver
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    name: String,
    env_prefix: String,
    search_path: SearchPath,
    env_vars: Option<Map<String, String>>,
    config_file: Option<PathBuf>,
    defaults: KeyedValues,
    overrides: KeyedValues,
    file_layer: Config,
    env_layer: Config,
    /// Values from `set` only
    explicit_layer: Config,
    /// Every layer, defaults included
    merged: Config,
    /// Every layer except defaults; answers `is_set`
    supplied: Config,
}

impl ConfigResolver {
    /// Create an uninitialized resolver over `search_path`.
    pub fn new(search_path: SearchPath) -> Self {
        Self {
            name: CONFIG_NAME.to_string(),
            env_prefix: ENV_PREFIX.to_string(),
            search_path,
            env_vars: None,
            config_file: None,
            defaults: KeyedValues::default(),
            overrides: KeyedValues::default(),
            file_layer: Config::default(),
            env_layer: Config::default(),
            explicit_layer: Config::default(),
            merged: Config::default(),
            supplied: Config::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Use `vars` instead of the process environment.
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Register defaults, capture the environment, and load the first config
    /// file found. A missing file is fine; an unreadable one is not.
    pub fn initialize(&mut self) -> Result<(), ConfigError> {
        for (key, value) in merge_policy::builtin_defaults() {
            self.defaults.insert_if_absent(key, value);
        }

        self.env_layer = environment::load(&self.env_prefix, self.env_vars.clone())
            .map_err(ConfigError::Environment)?;

        let target = match &self.config_file {
            Some(named) => Some(named.clone()).filter(|p| p.is_file()),
            None => config_file::find(&self.search_path, &self.name),
        };

        if let Some(path) = target {
            self.file_layer = config_file::load(&path)?;
            info!(config_file = %path.display(), "Loaded configuration");
            self.config_file = Some(path);
        } else {
            debug!(name = %self.name, "No configuration file found, using defaults");
        }

        self.rebuild().map_err(ConfigError::Merge)
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    /// File that was loaded or explicitly named, if any.
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Name the file used for reading at `initialize` and for `write_config`.
    pub fn set_config_file(&mut self, path: impl Into<PathBuf>) {
        self.config_file = Some(path.into());
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.merged.get::<Value>(key).ok()
    }

    pub fn get_string(&self, key: &str) -> String {
        self.merged.get_string(key).unwrap_or_default()
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.merged.get_bool(key).unwrap_or_default()
    }

    pub fn get_int(&self, key: &str) -> i64 {
        self.merged.get_int(key).unwrap_or_default()
    }

    pub fn get_float(&self, key: &str) -> f64 {
        self.merged.get_float(key).unwrap_or_default()
    }

    /// Lists come back element-wise; a scalar string is split on whitespace.
    pub fn get_string_slice(&self, key: &str) -> Vec<String> {
        match self.merged.get_array(key) {
            Ok(values) => values
                .into_iter()
                .filter_map(|v| v.into_string().ok())
                .collect(),
            Err(_) => self
                .merged
                .get_string(key)
                .map(|s| s.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }

    /// Deserialize the subtree under `key` into `T`.
    pub fn unmarshal_key<T: DeserializeOwned>(&self, key: &str) -> Result<T, ConfigError> {
        self.merged
            .get::<T>(key)
            .map_err(|source| ConfigError::Decode {
                key: key.to_string(),
                source,
            })
    }

    /// Explicit value, highest precedence, lives as long as this resolver.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        let previous = self.overrides.clone();
        self.overrides.upsert(key, value.into());
        self.commit_or_restore(key, |resolver| resolver.overrides = previous)
    }

    /// Fallback value, lowest precedence. Last call per key wins.
    pub fn set_default(&mut self, key: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        let previous = self.defaults.clone();
        self.defaults.upsert(key, value.into());
        self.commit_or_restore(key, |resolver| resolver.defaults = previous)
    }

    /// True when the file, the environment, or `set` supplied the key.
    pub fn is_set(&self, key: &str) -> bool {
        self.supplied.get::<Value>(key).is_ok()
    }

    /// Highest layer holding `key`; `None` when nothing, not even a default, does.
    pub fn layer_of(&self, key: &str) -> Option<Layer> {
        let holds = |config: &Config| config.get::<Value>(key).is_ok();
        if holds(&self.explicit_layer) {
            Some(Layer::Explicit)
        } else if holds(&self.env_layer) {
            Some(Layer::Environment)
        } else if holds(&self.file_layer) {
            Some(Layer::File)
        } else if holds(&self.merged) {
            Some(Layer::Default)
        } else {
            None
        }
    }

    /// Every resolved setting as a JSON tree with sorted keys.
    pub fn all_settings(&self) -> Result<serde_json::Value, ConfigError> {
        self.merged
            .clone()
            .try_deserialize::<serde_json::Value>()
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Resolved settings rendered as YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        let settings = self.all_settings()?;
        serde_yaml::to_string(&settings).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Persist every resolved setting to the loaded or named file.
    pub fn write_config(&self) -> Result<(), ConfigError> {
        let path = self.config_file.as_deref().ok_or(ConfigError::NoTargetFile)?;
        self.write_to(path)
    }

    /// Write to the loaded or named file, else to the search path's write
    /// target. Never replaces an existing file.
    pub fn safe_write_config(&mut self) -> Result<PathBuf, ConfigError> {
        let path = match &self.config_file {
            Some(path) => path.clone(),
            None => self
                .search_path
                .write_target(&format!("{}.{}", self.name, config_file::EXTENSIONS[0]))
                .ok_or(ConfigError::NoTargetFile)?,
        };

        if path.exists() {
            return Err(ConfigError::AlreadyExists(path));
        }

        self.write_to(&path)?;
        self.config_file = Some(path.clone());
        Ok(path)
    }

    fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        let yaml = self.to_yaml()?;
        write_file_atomic(path, yaml.as_bytes()).map_err(|source| ConfigError::WriteFailure {
            path: path.to_path_buf(),
            source,
        })?;
        info!(config_file = %path.display(), "Configuration written");
        Ok(())
    }

    fn rebuild(&mut self) -> Result<(), config::ConfigError> {
        let merged = merge_policy::layered(
            Some(&self.defaults),
            &self.file_layer,
            &self.env_layer,
            &self.overrides,
        )?;
        let supplied =
            merge_policy::layered(None, &self.file_layer, &self.env_layer, &self.overrides)?;
        let explicit = merge_policy::layered(
            None,
            &Config::default(),
            &Config::default(),
            &self.overrides,
        )?;

        self.merged = merged;
        self.supplied = supplied;
        self.explicit_layer = explicit;
        Ok(())
    }

    fn commit_or_restore<F>(&mut self, key: &str, restore: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut Self),
    {
        self.rebuild().map_err(|source| {
            restore(self);
            ConfigError::InvalidKey {
                key: key.to_string(),
                source,
            }
        })
    }
}
