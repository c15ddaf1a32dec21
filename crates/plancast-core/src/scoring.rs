//! Plan Disruption Score calculator.
//!
//! Converts a [`WeatherSample`] plus a [`ScoringMode`] into a weighted,
//! clamped 0-100 disruption score with a per-factor point breakdown.
//!
//! Each factor is rounded to whole points *before* summation. The clamped
//! total can therefore differ by a point or two from rounding the raw
//! weighted sum; downstream consumers (saved plan snapshots in particular)
//! depend on the round-then-sum order, so it must not be "simplified".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::weather::WeatherSample;

/// Comfort baseline in °C. Deviation in either direction penalizes equally.
pub const COMFORT_TEMP_C: f64 = 20.0;

/// Named weight configuration selecting how much each factor contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Hand-picked weights from meteorological thresholds.
    #[default]
    Rule,
    /// Regression-derived weights trained on historical disruption labels.
    Model,
}

impl ScoringMode {
    /// The fixed weight triple for this mode. Not user-editable.
    pub fn weights(&self) -> FactorWeights {
        match self {
            ScoringMode::Rule => FactorWeights {
                rain: 6.0,
                wind: 4.0,
                temp: 3.0,
            },
            // Logistic-regression coefficients scaled to sum to 13,
            // produced by the offline training run.
            ScoringMode::Model => FactorWeights {
                rain: 7.56,
                wind: 1.71,
                temp: 3.73,
            },
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Rule => write!(f, "rule"),
            ScoringMode::Model => write!(f, "model"),
        }
    }
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rule" => Ok(ScoringMode::Rule),
            "model" => Ok(ScoringMode::Model),
            other => Err(format!("unknown scoring mode: {other} (expected rule or model)")),
        }
    }
}

/// Weight triple applied to rain, wind and temperature deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    pub rain: f64,
    pub wind: f64,
    pub temp: f64,
}

/// The three weather factors that feed the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    Rain,
    Wind,
    Temperature,
}

/// Per-factor points plus the clamped total.
///
/// Derived data, recomputed on every call; only ever persisted as a frozen
/// historical snapshot on a [`Plan`](crate::plan::Plan) after its date has
/// passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub rain_points: i64,
    pub wind_points: i64,
    pub temp_points: i64,
    /// Total disruption score, clamped to [0, 100].
    pub total: i64,
}

impl ScoreBreakdown {
    /// Sum of the factor points before clamping.
    ///
    /// The explanation generator branches on this, not on `total`, so its
    /// favorable early exit can fire even when one oversized factor has
    /// pinned the total at the clamp ceiling.
    pub fn factor_sum(&self) -> i64 {
        self.rain_points + self.wind_points + self.temp_points
    }

    /// The factor contributing the most points.
    ///
    /// Ties resolve in priority order rain, then wind: rain wins whenever
    /// it is >= both others, wind whenever it is >= both others.
    pub fn dominant_factor(&self) -> Factor {
        if self.rain_points >= self.wind_points && self.rain_points >= self.temp_points {
            Factor::Rain
        } else if self.wind_points >= self.rain_points && self.wind_points >= self.temp_points {
            Factor::Wind
        } else {
            Factor::Temperature
        }
    }
}

/// Score a weather sample under the given mode.
///
/// Pure and total over finite inputs; precipitation and wind speed are
/// expected non-negative but nothing breaks when they are not.
pub fn calculate_score(sample: &WeatherSample, mode: ScoringMode) -> ScoreBreakdown {
    let weights = mode.weights();

    let rain_points = (sample.precipitation_mm * weights.rain).round() as i64;
    let wind_points = (sample.wind_speed_ms * weights.wind).round() as i64;
    let temp_points = ((sample.temperature_c - COMFORT_TEMP_C).abs() * weights.temp).round() as i64;

    let total = (rain_points + wind_points + temp_points).clamp(0, 100);

    ScoreBreakdown {
        rain_points,
        wind_points,
        temp_points,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn comfortable_calm_day_scores_zero_in_both_modes() {
        let sample = WeatherSample::new(20.0, 0.0, 0.0);
        for mode in [ScoringMode::Rule, ScoringMode::Model] {
            let breakdown = calculate_score(&sample, mode);
            assert_eq!(breakdown.total, 0, "mode {mode}");
            assert_eq!(breakdown.factor_sum(), 0);
        }
    }

    #[test]
    fn rounds_each_factor_before_summation() {
        // 1.0mm * 6 = 6 exactly; wind and temp contribute nothing.
        let sample = WeatherSample::new(20.0, 1.0, 0.0);
        let breakdown = calculate_score(&sample, ScoringMode::Rule);
        assert_eq!(breakdown.rain_points, 6);
        assert_eq!(breakdown.wind_points, 0);
        assert_eq!(breakdown.temp_points, 0);
        assert_eq!(breakdown.total, 6);
    }

    #[test]
    fn per_factor_rounding_can_shift_the_total() {
        // Rule weights: rain 0.4*6=2.4 -> 2, wind 0.6*4=2.4 -> 2,
        // temp |20.8-20|*3=2.4 -> 2. Round-then-sum gives 6; rounding the
        // raw sum (7.2) would give 7.
        let sample = WeatherSample::new(20.8, 0.4, 0.6);
        let breakdown = calculate_score(&sample, ScoringMode::Rule);
        assert_eq!(breakdown.total, 6);
    }

    #[test]
    fn temperature_deviation_penalizes_both_directions() {
        let cold = calculate_score(&WeatherSample::new(10.0, 0.0, 0.0), ScoringMode::Rule);
        let hot = calculate_score(&WeatherSample::new(30.0, 0.0, 0.0), ScoringMode::Rule);
        assert_eq!(cold.temp_points, 30);
        assert_eq!(hot.temp_points, 30);
    }

    #[test]
    fn total_clamps_at_one_hundred() {
        let sample = WeatherSample::new(-30.0, 40.0, 25.0);
        let breakdown = calculate_score(&sample, ScoringMode::Rule);
        assert!(breakdown.factor_sum() > 100);
        assert_eq!(breakdown.total, 100);
    }

    #[test]
    fn model_weights_sum_to_thirteen() {
        let w = ScoringMode::Model.weights();
        assert!((w.rain + w.wind + w.temp - 13.0).abs() < 1e-9);
    }

    #[test]
    fn dominant_factor_ties_favor_rain_then_wind() {
        let even = ScoreBreakdown {
            rain_points: 10,
            wind_points: 10,
            temp_points: 10,
            total: 30,
        };
        assert_eq!(even.dominant_factor(), Factor::Rain);

        let wind_and_temp = ScoreBreakdown {
            rain_points: 3,
            wind_points: 12,
            temp_points: 12,
            total: 27,
        };
        assert_eq!(wind_and_temp.dominant_factor(), Factor::Wind);

        let temp_only = ScoreBreakdown {
            rain_points: 2,
            wind_points: 5,
            temp_points: 20,
            total: 27,
        };
        assert_eq!(temp_only.dominant_factor(), Factor::Temperature);
    }

    #[test]
    fn scoring_mode_parses_from_str() {
        assert_eq!("rule".parse::<ScoringMode>().unwrap(), ScoringMode::Rule);
        assert_eq!("Model".parse::<ScoringMode>().unwrap(), ScoringMode::Model);
        assert!("ai".parse::<ScoringMode>().is_err());
    }

    proptest! {
        #[test]
        fn total_stays_in_bounds(
            temp in -80.0f64..60.0,
            rain in 0.0f64..500.0,
            wind in 0.0f64..120.0,
        ) {
            let sample = WeatherSample::new(temp, rain, wind);
            for mode in [ScoringMode::Rule, ScoringMode::Model] {
                let breakdown = calculate_score(&sample, mode);
                prop_assert!((0..=100).contains(&breakdown.total));
            }
        }
    }
}
