//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Clock format for rendered bedtimes
//! - Optional model artifact override
//! - Default estimate inputs (so repeated experimentation does not require
//!   retyping every value)
//!
//! Configuration is stored at `~/.config/restwise/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;
use crate::estimator::ClockFormat;

/// Clock rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_clock_format")]
    pub format: ClockFormat,
}

/// Model artifact configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to a JSON model artifact. Unset means the bundled artifact.
    #[serde(default)]
    pub artifact_path: Option<PathBuf>,
}

/// Default inputs for the estimate command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_sleep_hours")]
    pub sleep_hours: f64,
    #[serde(default = "default_coffee_cups")]
    pub coffee_cups: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/restwise/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

// Default functions
fn default_clock_format() -> ClockFormat {
    ClockFormat::TwelveHour
}
fn default_sleep_hours() -> f64 {
    8.0
}
fn default_coffee_cups() -> u32 {
    1
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            format: default_clock_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            sleep_hours: default_sleep_hours(),
            coffee_cups: default_coffee_cups(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing defaults on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "clock.format" => Some(self.clock.format.as_str().to_string()),
            "model.artifact_path" => Some(
                self.model
                    .artifact_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "defaults.sleep_hours" => Some(self.defaults.sleep_hours.to_string()),
            "defaults.coffee_cups" => Some(self.defaults.coffee_cups.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key and persist. Unknown keys are an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "clock.format" => {
                self.clock.format = value.parse().map_err(|message| ConfigError::InvalidValue {
                    key: key.into(),
                    message,
                })?;
            }
            "model.artifact_path" => {
                self.model.artifact_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "defaults.sleep_hours" => {
                self.defaults.sleep_hours =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.into(),
                        message: format!("cannot parse '{value}' as number"),
                    })?;
            }
            "defaults.coffee_cups" => {
                self.defaults.coffee_cups =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.into(),
                        message: format!("cannot parse '{value}' as integer"),
                    })?;
            }
            _ => return Err(ConfigError::UnknownKey(key.into())),
        }
        self.save()
    }
}
