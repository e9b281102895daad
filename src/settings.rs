//! Settings for the command-line tool: where the store and the default
//! templates live, and how to log.
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! settings file, then `GROWI_CONFIG__*` environment variables.

use crate::error::LoadError;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for settings overrides, e.g. `GROWI_CONFIG__STORE_PATH`.
pub const SETTINGS_ENV_PREFIX: &str = "GROWI_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory of the sled config store.
    pub store_path: PathBuf,

    /// JSON file with the default templates. Empty templates when unset.
    #[serde(default)]
    pub templates_path: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            templates_path: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// Platform data directory, or `.growi-config/store` when none is known.
pub fn default_store_path() -> PathBuf {
    ProjectDirs::from("org", "growi", "growi-config")
        .map(|dirs| dirs.data_dir().join("store"))
        .unwrap_or_else(|| PathBuf::from(".growi-config").join("store"))
}

impl Settings {
    /// Load settings. A missing settings file is an error only when one was
    /// named explicitly.
    pub fn load(settings_file: Option<&Path>) -> Result<Self, LoadError> {
        let defaults = Settings::default();
        let store_path = defaults.store_path.to_string_lossy().into_owned();

        let mut builder = Config::builder()
            .set_default("store_path", store_path)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            .set_default("logging.output", defaults.logging.output)?
            .set_default("logging.color", defaults.logging.color)?;

        if let Some(path) = settings_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(SETTINGS_ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
