//! Configuration module for romsift
//!
//! Settings are layered: built-in defaults, then the optional config file in
//! the user's config directory (`~/.config/romsift/config.toml` on Linux),
//! then `ROMSIFT_*` environment variables. Command-line flags are applied on
//! top by the caller. The file is only ever read, never created.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::plan::KeepPolicy;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RomSiftConfig {
    /// Which file of a title group a non-interactive sift keeps
    #[serde(default)]
    pub keep: KeepPolicy,

    /// Tags ranked best first, used by the `preferred` keep policy
    #[serde(default)]
    pub preferred_tags: Vec<String>,

    /// Narrate every file found and every skipped file
    #[serde(default)]
    pub verbose: bool,
}

impl RomSiftConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("romsift").join("config.toml"))
    }

    /// Load configuration from the default location and the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be parsed,
    /// or an environment override has an invalid value.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path().ok();
        Self::load_from(path.as_deref())
    }

    /// Load configuration from `path` (if given and present) and the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or a value has the
    /// wrong type.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        let settings = builder
            .add_source(
                Environment::with_prefix("ROMSIFT")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("preferred_tags"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Render the configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}
