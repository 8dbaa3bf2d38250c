//! TOML-based application configuration.
//!
//! Stored at `~/.config/taskline/config.toml`. Currently holds the
//! date-time layout used when rendering schedules and task lists.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;
use crate::render::DEFAULT_DATE_FORMAT;

const CONFIG_FILE: &str = "config.toml";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// strftime layout for rendering date-times.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Config {
    /// Load the configuration, falling back to defaults when the file does
    /// not exist yet.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(ConfigError::LoadFailed {
                    path,
                    message: err.to_string(),
                });
            }
        };
        toml::from_str(&text).map_err(|err| ConfigError::LoadFailed {
            path,
            message: err.to_string(),
        })
    }

    /// Save the configuration.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_path()?;
        let text = toml::to_string_pretty(self).map_err(|err| ConfigError::SaveFailed {
            path: path.clone(),
            message: err.to_string(),
        })?;
        fs::write(&path, text).map_err(|err| ConfigError::SaveFailed {
            path,
            message: err.to_string(),
        })
    }
}

fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = data_dir().map_err(|err| ConfigError::LoadFailed {
        path: PathBuf::from(CONFIG_FILE),
        message: err.to_string(),
    })?;
    Ok(dir.join(CONFIG_FILE))
}
