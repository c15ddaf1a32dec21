//! Forecast data providers.

mod open_meteo;

pub use open_meteo::{extract_noon_samples, HourlyData, OpenMeteoClient, OpenMeteoResponse};
