//! Configuration loading
//!
//! One `stagehand.toml` declares the plan location, the manifest data
//! directory, and the environments a plan can be deployed to. Unknown keys
//! are warned about rather than rejected, so configs written against newer
//! versions still load.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::value_objects::DEFAULT_BASE_GAS_LIMIT;

/// Environment variable overriding the config file location (used by tests
/// and CI wrappers)
pub const CONFIG_ENV_VAR: &str = "STAGEHAND_CONFIG";

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "stagehand.toml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Descriptor set location, relative to the config file
    #[serde(default = "default_plan_path")]
    pub plan: PathBuf,

    /// Manifest directory, relative to the config file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub environments: BTreeMap<String, EnvironmentConfig>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EnvironmentConfig {
    /// External environment client program
    pub client: String,

    /// Arguments always passed to the client, before the subcommand
    #[serde(default)]
    pub client_args: Vec<String>,

    /// Per-step gas ceiling for components without their own override
    #[serde(default = "default_base_gas_limit")]
    pub base_gas_limit: u64,

    /// Pause between the last registration and the manifest write
    #[serde(default)]
    pub settle_ms: u64,
}

impl EnvironmentConfig {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plan: default_plan_path(),
            data_dir: default_data_dir(),
            environments: BTreeMap::new(),
        }
    }
}

fn default_plan_path() -> PathBuf {
    PathBuf::from("components.toml")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_base_gas_limit() -> u64 {
    DEFAULT_BASE_GAS_LIMIT
}

/// Non-fatal configuration warning surfaced to CLI users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("no config file found - create {DEFAULT_CONFIG_FILE} or pass --config")]
    NotFound,

    #[error("unknown environment '{name}' - defined environments: {known}")]
    UnknownEnvironment { name: String, known: String },

    #[error("base gas limit for environment '{name}' must be positive")]
    ZeroBaseLimit { name: String },
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);
        let config: Config = serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        config.validate()?;

        let warnings = unknown_paths
            .into_iter()
            .map(|key| ConfigWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Look up an environment by name
    pub fn environment(&self, name: &str) -> Result<&EnvironmentConfig, ConfigError> {
        self.environments
            .get(name)
            .ok_or_else(|| ConfigError::UnknownEnvironment {
                name: name.to_string(),
                known: if self.environments.is_empty() {
                    "(none)".to_string()
                } else {
                    self.environments
                        .keys()
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", ")
                },
            })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, environment) in &self.environments {
            if environment.base_gas_limit == 0 {
                return Err(ConfigError::ZeroBaseLimit { name: name.clone() });
            }
        }
        Ok(())
    }
}

/// Locate the config file: explicit flag, then `STAGEHAND_CONFIG`, then
/// `./stagehand.toml`, then the user config directory.
pub fn locate(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return Ok(local);
    }
    if let Some(dir) = dirs::config_dir() {
        let user = dir.join("stagehand").join(DEFAULT_CONFIG_FILE);
        if user.exists() {
            return Ok(user);
        }
    }
    Err(ConfigError::NotFound)
}
