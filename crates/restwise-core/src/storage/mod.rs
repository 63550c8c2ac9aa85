//! Configuration storage.
//!
//! TOML-based configuration under `~/.config/restwise[-dev]/`. There is no
//! session persistence: inputs and results live only for the duration of
//! one calculation.

mod config;

pub use config::{ClockConfig, Config, DefaultsConfig, ModelConfig};

use std::path::PathBuf;

/// Returns `~/.config/restwise[-dev]/` based on RESTWISE_ENV.
///
/// Set RESTWISE_ENV=dev to use the development data directory.
///
/// # Errors
///
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("RESTWISE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("restwise-dev")
    } else {
        base_dir.join("restwise")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
