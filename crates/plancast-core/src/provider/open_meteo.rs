//! Open-Meteo hourly forecast client.
//!
//! Fetches `temperature_2m`, `precipitation` and `wind_speed_10m` hourly
//! arrays and extracts the noon slot for each requested day. The API
//! reports wind in km/h; samples are normalized to m/s at construction.
//!
//! Slots the forecast horizon could not fill (short arrays or JSON nulls)
//! come back as `None` so callers can skip a day instead of failing the
//! whole series. No retries, no caching.

use serde::Deserialize;

use crate::error::ProviderError;
use crate::weather::WeatherSample;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Hour of day extracted as the representative sample.
const NOON_HOUR: usize = 12;

/// Top-level Open-Meteo forecast response.
#[derive(Debug, Deserialize)]
pub struct OpenMeteoResponse {
    pub hourly: HourlyData,
}

/// Hourly arrays; entries are nullable in the API.
#[derive(Debug, Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub precipitation: Vec<Option<f64>>,
    pub wind_speed_10m: Vec<Option<f64>>,
}

/// Pull the noon sample for each of the first `days` day offsets.
///
/// Output keeps one `(offset, sample)` entry per requested day, in
/// chronological order; a day whose noon slot is missing in any of the
/// three arrays yields `None`.
pub fn extract_noon_samples(hourly: &HourlyData, days: i64) -> Vec<(i64, Option<WeatherSample>)> {
    (0..days)
        .map(|offset| {
            let idx = offset as usize * 24 + NOON_HOUR;
            let sample = match (
                hourly.temperature_2m.get(idx).copied().flatten(),
                hourly.precipitation.get(idx).copied().flatten(),
                hourly.wind_speed_10m.get(idx).copied().flatten(),
            ) {
                (Some(temp), Some(precip), Some(wind_kmh)) => {
                    Some(WeatherSample::from_api_units(temp, precip, wind_kmh))
                }
                _ => None,
            };
            (offset, sample)
        })
        .collect()
}

/// HTTP client for the Open-Meteo forecast API.
pub struct OpenMeteoClient {
    client: reqwest::Client,
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch noon samples for `days` days starting today at the given
    /// coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure, non-success status
    /// or a response body that does not match the expected shape.
    pub async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: i64,
    ) -> Result<Vec<(i64, Option<WeatherSample>)>, ProviderError> {
        let resp = self
            .client
            .get(FORECAST_URL)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                (
                    "hourly",
                    "temperature_2m,precipitation,wind_speed_10m".to_string(),
                ),
                ("forecast_days", days.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ProviderError::BadStatus {
                status: resp.status().as_u16(),
            });
        }

        let body: OpenMeteoResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        Ok(extract_noon_samples(&body.hourly, days))
    }

    /// Synchronous wrapper for CLI callers: spins up a runtime and blocks
    /// on [`fetch_forecast`](Self::fetch_forecast).
    pub fn fetch_forecast_blocking(
        &self,
        latitude: f64,
        longitude: f64,
        days: i64,
    ) -> Result<Vec<(i64, Option<WeatherSample>)>, ProviderError> {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.fetch_forecast(latitude, longitude, days))
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}
