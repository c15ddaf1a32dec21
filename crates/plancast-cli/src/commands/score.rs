//! Scoring commands: score an explicit sample or today's fetched forecast.

use clap::Subcommand;
use serde::Serialize;

use plancast_core::{
    calculate_score, classify, explain, Guidance, OpenMeteoClient, RiskTolerance, ScoreBreakdown,
    ScoringMode, Settings, WeatherSample,
};

#[derive(Subcommand)]
pub enum ScoreAction {
    /// Score an explicit weather sample
    Compute {
        /// Temperature in °C
        #[arg(long)]
        temp: f64,
        /// Precipitation in mm
        #[arg(long)]
        rain: f64,
        /// Wind speed in m/s (or km/h with --wind-kmh)
        #[arg(long)]
        wind: f64,
        /// Treat --wind as km/h and normalize to m/s
        #[arg(long)]
        wind_kmh: bool,
        /// Scoring mode (rule or model); defaults to the configured mode
        #[arg(long)]
        mode: Option<ScoringMode>,
        /// Risk tolerance (low, medium, high); defaults to the configured one
        #[arg(long)]
        tolerance: Option<RiskTolerance>,
    },
    /// Fetch today's noon forecast and score it
    Today {
        /// Latitude
        #[arg(long)]
        lat: Option<f64>,
        /// Longitude
        #[arg(long)]
        lon: Option<f64>,
        /// Saved location name
        #[arg(long)]
        location: Option<String>,
    },
}

/// What the score commands print.
#[derive(Serialize)]
struct ScoreReport {
    sample: WeatherSample,
    mode: ScoringMode,
    breakdown: ScoreBreakdown,
    guidance: Guidance,
    explanation: String,
}

pub fn run(action: ScoreAction) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load_or_default();

    match action {
        ScoreAction::Compute {
            temp,
            rain,
            wind,
            wind_kmh,
            mode,
            tolerance,
        } => {
            let sample = if wind_kmh {
                WeatherSample::from_api_units(temp, rain, wind)
            } else {
                WeatherSample::new(temp, rain, wind)
            };
            let mode = mode.unwrap_or(settings.scoring.mode);
            let tolerance = tolerance.unwrap_or(settings.guidance.risk_tolerance);
            print_report(&sample, mode, tolerance, &settings)?;
        }
        ScoreAction::Today { lat, lon, location } => {
            let (lat, lon) =
                super::resolve_coordinates(lat, lon, location.as_deref(), &settings)?;
            let client = OpenMeteoClient::new();
            let samples = client.fetch_forecast_blocking(lat, lon, 1)?;
            let sample = samples
                .first()
                .and_then(|(_, s)| *s)
                .ok_or("forecast has no noon sample for today")?;
            print_report(
                &sample,
                settings.scoring.mode,
                settings.guidance.risk_tolerance,
                &settings,
            )?;
        }
    }
    Ok(())
}

fn print_report(
    sample: &WeatherSample,
    mode: ScoringMode,
    tolerance: RiskTolerance,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let breakdown = calculate_score(sample, mode);
    let report = ScoreReport {
        sample: *sample,
        mode,
        breakdown,
        guidance: classify(breakdown.total, tolerance),
        explanation: explain(sample, &breakdown, settings.units.wind_speed),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
