//! Normalized weather observations and display units.
//!
//! A [`WeatherSample`] is the single input type of the scoring engine:
//! temperature in °C, precipitation in mm and wind speed in m/s. Wind is
//! normalized at ingestion -- the forecast API reports km/h, so every
//! construction path that takes API values divides by 3.6 exactly once.
//! Display units only affect presentation, never the numeric score.

use serde::{Deserialize, Serialize};

/// Factor from km/h to m/s (and back).
pub const KMH_PER_MS: f64 = 3.6;

/// One normalized weather observation.
///
/// Immutable for the duration of a scoring pass; all engine functions
/// take it by reference or copy and never mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Air temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Precipitation in millimeters.
    pub precipitation_mm: f64,
    /// Wind speed in meters per second.
    pub wind_speed_ms: f64,
}

impl WeatherSample {
    /// Create a sample from already-normalized values (wind in m/s).
    pub fn new(temperature_c: f64, precipitation_mm: f64, wind_speed_ms: f64) -> Self {
        Self {
            temperature_c,
            precipitation_mm,
            wind_speed_ms,
        }
    }

    /// Create a sample from forecast-API units, converting wind from km/h.
    pub fn from_api_units(temperature_c: f64, precipitation_mm: f64, wind_speed_kmh: f64) -> Self {
        Self {
            temperature_c,
            precipitation_mm,
            wind_speed_ms: wind_speed_kmh / KMH_PER_MS,
        }
    }
}

/// Temperature display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a Celsius value into this unit.
    pub fn convert(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// Wind speed display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedUnit {
    /// Meters per second (the internal unit).
    #[default]
    #[serde(rename = "ms")]
    MetersPerSecond,
    /// Kilometers per hour.
    #[serde(rename = "kmh")]
    KilometersPerHour,
}

impl SpeedUnit {
    /// Convert an m/s value into this unit.
    pub fn convert(&self, meters_per_second: f64) -> f64 {
        match self {
            SpeedUnit::MetersPerSecond => meters_per_second,
            SpeedUnit::KilometersPerHour => meters_per_second * KMH_PER_MS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpeedUnit::MetersPerSecond => "m/s",
            SpeedUnit::KilometersPerHour => "km/h",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_api_units_normalizes_wind_to_ms() {
        let sample = WeatherSample::from_api_units(18.0, 2.5, 36.0);
        assert_eq!(sample.wind_speed_ms, 10.0);
        assert_eq!(sample.temperature_c, 18.0);
        assert_eq!(sample.precipitation_mm, 2.5);
    }

    #[test]
    fn temperature_conversion() {
        assert_eq!(TemperatureUnit::Celsius.convert(20.0), 20.0);
        assert_eq!(TemperatureUnit::Fahrenheit.convert(20.0), 68.0);
        assert_eq!(TemperatureUnit::Fahrenheit.convert(0.0), 32.0);
    }

    #[test]
    fn speed_conversion_roundtrip_factor() {
        assert_eq!(SpeedUnit::MetersPerSecond.convert(5.0), 5.0);
        assert!((SpeedUnit::KilometersPerHour.convert(5.0) - 18.0).abs() < 1e-9);
    }

    #[test]
    fn unit_labels() {
        assert_eq!(TemperatureUnit::Fahrenheit.label(), "°F");
        assert_eq!(SpeedUnit::KilometersPerHour.label(), "km/h");
    }
}
