//! Multi-day forecast outlook command.

use chrono::Local;
use clap::Subcommand;

use plancast_core::{reduce_forecast, OpenMeteoClient, RiskTolerance, ScoringMode, Settings};

#[derive(Subcommand)]
pub enum ForecastAction {
    /// Fetch and reduce a multi-day forecast into a labeled trend
    Show {
        /// Latitude
        #[arg(long)]
        lat: Option<f64>,
        /// Longitude
        #[arg(long)]
        lon: Option<f64>,
        /// Saved location name
        #[arg(long)]
        location: Option<String>,
        /// Number of days to forecast
        #[arg(long, default_value = "5")]
        days: i64,
        /// Scoring mode override
        #[arg(long)]
        mode: Option<ScoringMode>,
        /// Risk tolerance override
        #[arg(long)]
        tolerance: Option<RiskTolerance>,
    },
}

pub fn run(action: ForecastAction) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load_or_default();

    match action {
        ForecastAction::Show {
            lat,
            lon,
            location,
            days,
            mode,
            tolerance,
        } => {
            let (lat, lon) =
                super::resolve_coordinates(lat, lon, location.as_deref(), &settings)?;
            let mode = mode.unwrap_or(settings.scoring.mode);
            let tolerance = tolerance.unwrap_or(settings.guidance.risk_tolerance);

            let client = OpenMeteoClient::new();
            let samples = client.fetch_forecast_blocking(lat, lon, days)?;
            let trend = reduce_forecast(Local::now().date_naive(), &samples, mode, tolerance);

            println!("{}", serde_json::to_string_pretty(&trend)?);
        }
    }
    Ok(())
}
