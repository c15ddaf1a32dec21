//! TOML-based user settings.
//!
//! Stores the scoring mode, risk tolerance, display units and an optional
//! default location. Persisted at `~/.config/plancast/config.toml`.
//!
//! Display units only shape presentation (raw values and the wind
//! sentence in explanations); the numeric score never depends on them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::guidance::RiskTolerance;
use crate::scoring::ScoringMode;
use crate::weather::{SpeedUnit, TemperatureUnit};

/// Scoring-related settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub mode: ScoringMode,
}

/// Guidance-related settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuidanceConfig {
    #[serde(default)]
    pub risk_tolerance: RiskTolerance,
}

/// Display unit preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitsConfig {
    #[serde(default)]
    pub temperature: TemperatureUnit,
    #[serde(default)]
    pub wind_speed: SpeedUnit,
}

/// Optional default location used when a command omits coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Application settings.
///
/// Serialized to/from TOML at `~/.config/plancast/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub guidance: GuidanceConfig,
    #[serde(default)]
    pub units: UnitsConfig,
    #[serde(default)]
    pub location: Option<LocationConfig>,
}

impl Settings {
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let settings =
                    toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                        path,
                        message: e.to_string(),
                    })?;
                Ok(settings)
            }
            Err(_) => {
                let settings = Self::default();
                settings.save()?;
                Ok(settings)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be serialized or written.
    pub fn save(&self) -> Result<()> {
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

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a settings value as a string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "scoring.mode" => Some(self.scoring.mode.to_string()),
            "guidance.risk_tolerance" => Some(self.guidance.risk_tolerance.to_string()),
            "units.temperature" => Some(
                match self.units.temperature {
                    TemperatureUnit::Celsius => "celsius",
                    TemperatureUnit::Fahrenheit => "fahrenheit",
                }
                .to_string(),
            ),
            "units.wind_speed" => Some(
                match self.units.wind_speed {
                    SpeedUnit::MetersPerSecond => "ms",
                    SpeedUnit::KilometersPerHour => "kmh",
                }
                .to_string(),
            ),
            "location.name" => self.location.as_ref().map(|l| l.name.clone()),
            "location.latitude" => self.location.as_ref().map(|l| l.latitude.to_string()),
            "location.longitude" => self.location.as_ref().map(|l| l.longitude.to_string()),
            _ => None,
        }
    }

    /// Set a settings value by key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error on unknown keys, unparseable values, or when the
    /// settings cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        match key {
            "scoring.mode" => self.scoring.mode = value.parse().map_err(invalid)?,
            "guidance.risk_tolerance" => {
                self.guidance.risk_tolerance = value.parse().map_err(invalid)?
            }
            "units.temperature" => {
                self.units.temperature = match value.to_lowercase().as_str() {
                    "celsius" | "c" => TemperatureUnit::Celsius,
                    "fahrenheit" | "f" => TemperatureUnit::Fahrenheit,
                    other => {
                        return Err(invalid(format!(
                            "unknown temperature unit: {other} (expected celsius or fahrenheit)"
                        ))
                        .into())
                    }
                }
            }
            "units.wind_speed" => {
                self.units.wind_speed = match value.to_lowercase().as_str() {
                    "ms" | "m/s" => SpeedUnit::MetersPerSecond,
                    "kmh" | "km/h" => SpeedUnit::KilometersPerHour,
                    other => {
                        return Err(invalid(format!(
                            "unknown wind speed unit: {other} (expected ms or kmh)"
                        ))
                        .into())
                    }
                }
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        }
        self.save()
    }
}
