//! # PlanCast Core Library
//!
//! Core business logic for PlanCast: a Plan Disruption Score (PDS) engine
//! that turns weather forecasts into Keep/Adjust/Reschedule guidance for
//! planned activities. The CLI binary is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Scoring**: pure round-then-sum weighted scoring of a weather
//!   sample, clamped to 0-100, under a rule-based or model-trained
//!   weight set
//! - **Guidance**: risk-tolerance thresholds partitioning the score into
//!   Keep/Adjust/Reschedule bands
//! - **Explanation**: a first-match decision tree producing one
//!   human-readable rationale per score
//! - **Forecast**: reduction of a multi-day series into a labeled trend
//! - **Storage**: SQLite plans/locations and TOML settings
//! - **Provider**: Open-Meteo hourly forecast client (noon samples)
//!
//! Every scoring-path function is synchronous, deterministic and free of
//! shared state; the single sequencing rule is that a plan's historical
//! score snapshot is recorded at most once (see [`plan`]).

pub mod error;
pub mod explain;
pub mod forecast;
pub mod guidance;
pub mod plan;
pub mod provider;
pub mod scoring;
pub mod storage;
pub mod weather;

pub use error::{ConfigError, CoreError, DatabaseError, PlanError, ProviderError, Result};
pub use explain::explain;
pub use forecast::{reduce_forecast, DayOutlook};
pub use guidance::{classify, Guidance, GuidanceLabel, RiskTolerance};
pub use plan::Plan;
pub use provider::OpenMeteoClient;
pub use scoring::{calculate_score, Factor, FactorWeights, ScoreBreakdown, ScoringMode};
pub use storage::{Database, SavedLocation, Settings};
pub use weather::{SpeedUnit, TemperatureUnit, WeatherSample};
