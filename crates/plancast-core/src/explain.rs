//! Natural-language rationale for a disruption score.
//!
//! A decision tree, not a ranking: the first matching branch produces the
//! one and only message. The favorable early exit compares the *pre-clamp*
//! factor sum against a fixed threshold, so it can fire even when one
//! huge factor has clamped the visible total to 100 while the others stay
//! small. Saved explanations depend on that exact branch order.

use crate::scoring::{Factor, ScoreBreakdown};
use crate::weather::{SpeedUnit, WeatherSample};

/// Factor-point sum below which conditions are reported as favorable.
const FAVORABLE_SUM_THRESHOLD: i64 = 15;

/// Precipitation above which the rain message cites the exact amount.
const HEAVY_RAIN_MM: f64 = 5.0;

/// Temperature below which the temperature message reads "cold".
const COLD_TEMP_C: f64 = 10.0;

/// Derive the explanation sentence for a scored sample.
///
/// `speed_unit` is the user's display preference; it shapes the wind
/// sentence only and never feeds back into the score.
pub fn explain(sample: &WeatherSample, breakdown: &ScoreBreakdown, speed_unit: SpeedUnit) -> String {
    if breakdown.factor_sum() < FAVORABLE_SUM_THRESHOLD {
        return "Conditions look favorable for your plans.".to_string();
    }

    match breakdown.dominant_factor() {
        Factor::Rain => {
            if sample.precipitation_mm > HEAVY_RAIN_MM {
                format!(
                    "Heavy rain expected ({:.1} mm). Consider moving your plans indoors.",
                    sample.precipitation_mm
                )
            } else {
                "Light rain could interfere with outdoor plans.".to_string()
            }
        }
        Factor::Wind => format!(
            "Strong winds around {:.1} {} may disrupt outdoor activities.",
            speed_unit.convert(sample.wind_speed_ms),
            speed_unit.label()
        ),
        Factor::Temperature => {
            if sample.temperature_c < COLD_TEMP_C {
                "Cold temperatures may make time outside uncomfortable.".to_string()
            } else {
                "High temperatures could make strenuous plans harder than usual.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{calculate_score, ScoringMode};

    fn breakdown(rain: i64, wind: i64, temp: i64) -> ScoreBreakdown {
        ScoreBreakdown {
            rain_points: rain,
            wind_points: wind,
            temp_points: temp,
            total: (rain + wind + temp).clamp(0, 100),
        }
    }

    #[test]
    fn low_factor_sum_returns_favorable_message() {
        let sample = WeatherSample::new(21.0, 0.5, 1.0);
        let b = breakdown(5, 5, 4);
        assert_eq!(b.factor_sum(), 14);
        let msg = explain(&sample, &b, SpeedUnit::MetersPerSecond);
        assert!(msg.contains("favorable"));
    }

    #[test]
    fn favorable_early_exit_ignores_the_clamped_total() {
        // The visible total sits at the clamp ceiling, but the branch
        // reads the pre-clamp factor sum (8 here), so the favorable
        // message still wins over any dominance check.
        let sample = WeatherSample::new(20.0, 1.0, 0.5);
        let b = ScoreBreakdown {
            rain_points: 6,
            wind_points: 2,
            temp_points: 0,
            total: 100,
        };
        let msg = explain(&sample, &b, SpeedUnit::MetersPerSecond);
        assert!(msg.contains("favorable"));
    }

    #[test]
    fn tied_factors_take_the_rain_branch() {
        let sample = WeatherSample::new(25.0, 3.0, 5.0);
        let b = breakdown(10, 10, 10);
        let msg = explain(&sample, &b, SpeedUnit::MetersPerSecond);
        assert!(msg.contains("rain") || msg.contains("Rain"));
    }

    #[test]
    fn heavy_rain_cites_the_exact_amount() {
        let sample = WeatherSample::new(18.0, 12.34, 1.0);
        let b = calculate_score(&sample, ScoringMode::Rule);
        let msg = explain(&sample, &b, SpeedUnit::MetersPerSecond);
        assert!(msg.contains("12.3 mm"), "got: {msg}");
    }

    #[test]
    fn light_rain_gets_the_generic_message() {
        let sample = WeatherSample::new(20.0, 3.0, 0.0);
        let b = breakdown(18, 0, 0);
        let msg = explain(&sample, &b, SpeedUnit::MetersPerSecond);
        assert!(msg.contains("Light rain"));
    }

    #[test]
    fn wind_message_respects_the_display_unit() {
        let sample = WeatherSample::new(20.0, 0.0, 10.0);
        let b = breakdown(0, 40, 0);

        let ms = explain(&sample, &b, SpeedUnit::MetersPerSecond);
        assert!(ms.contains("10.0 m/s"), "got: {ms}");

        let kmh = explain(&sample, &b, SpeedUnit::KilometersPerHour);
        assert!(kmh.contains("36.0 km/h"), "got: {kmh}");
    }

    #[test]
    fn temperature_branch_splits_cold_and_warm() {
        let cold_sample = WeatherSample::new(2.0, 0.0, 0.0);
        let b = calculate_score(&cold_sample, ScoringMode::Rule);
        let msg = explain(&cold_sample, &b, SpeedUnit::MetersPerSecond);
        assert!(msg.contains("Cold"));

        let warm_sample = WeatherSample::new(36.0, 0.0, 0.0);
        let b = calculate_score(&warm_sample, ScoringMode::Rule);
        let msg = explain(&warm_sample, &b, SpeedUnit::MetersPerSecond);
        assert!(msg.contains("High temperatures"));
        // No numeric value embedded in either terminal message.
        assert!(!msg.contains("36"));
    }
}
