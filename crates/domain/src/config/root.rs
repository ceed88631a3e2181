use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{CacheConfig, ConfigError, LoggingConfig};

/// Top-level configuration, loadable from TOML.
///
/// Every field has a default, so an empty document is a valid
/// configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
