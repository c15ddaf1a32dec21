//! Settings and persistence.

mod config;
pub mod database;

pub use config::{LocationConfig, Settings, UnitsConfig};
pub use database::{Database, SavedLocation};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/plancast[-dev]/` based on PLANCAST_ENV.
///
/// Set PLANCAST_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("PLANCAST_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("plancast-dev")
    } else {
        base_dir.join("plancast")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
