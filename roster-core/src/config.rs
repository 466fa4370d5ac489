//! Roster configuration.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::error::{RosterError, RosterResult};
use crate::store::STORAGE_KEY;

static DEFAULT_DATA_DIR: &str = "~/.local/share/roster";
static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Configuration at ~/.config/roster/config.toml, overridable with
/// `ROSTER_`-prefixed environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct RosterConfig {
    /// Directory holding the stored schedule.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
            log_level: default_log_level(),
        }
    }
}

impl RosterConfig {
    pub fn config_path() -> RosterResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RosterError::Config("Could not determine config directory".into()))?
            .join("roster");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, writing a commented-out one on first run.
    pub fn load() -> RosterResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// The file at `path` with `ROSTER_*` environment variables on top.
    pub fn load_from(path: &Path) -> RosterResult<Self> {
        Self::from_builder(file_source(path).add_source(environment()))
    }

    /// The file at `path` alone, ignoring the environment.
    pub fn load_file(path: &Path) -> RosterResult<Self> {
        Self::from_builder(file_source(path))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> RosterResult<Self> {
        builder
            .build()
            .map_err(|e| RosterError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RosterError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned())
    }

    pub fn create_default_config(path: &Path) -> RosterResult<()> {
        let contents = format!(
            "\
# roster configuration

# Where the schedule is stored:
# data_dir = \"{}\"

# Storage key of the schedule document:
# storage_key = \"{}\"

# Log level (overridden by RUST_LOG):
# log_level = \"{}\"
",
            DEFAULT_DATA_DIR, STORAGE_KEY, DEFAULT_LOG_LEVEL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RosterError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RosterError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn file_source(path: &Path) -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from(path.to_path_buf()).required(false))
}

fn environment() -> Environment {
    Environment::with_prefix("ROSTER")
}
