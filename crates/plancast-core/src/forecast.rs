//! Multi-day forecast reduction.
//!
//! Applies the score calculator and guidance classifier across an ordered
//! forecast series, producing one labeled outlook entry per day. Days are
//! scored independently -- no smoothing or carry-over -- and slots the
//! forecast horizon could not fill are skipped rather than failing the
//! whole series.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::guidance::{classify, Guidance, RiskTolerance};
use crate::scoring::{calculate_score, ScoringMode};
use crate::weather::WeatherSample;

/// One day of the reduced forecast trend.
#[derive(Debug, Clone, Serialize)]
pub struct DayOutlook {
    /// Weekday name, with "(Today)" / "(Tomorrow)" appended at offsets 0/1.
    pub day_label: String,
    /// Clamped disruption score for the day.
    pub score: i64,
    pub guidance: Guidance,
}

/// Weekday label for `today + offset`.
fn day_label(today: NaiveDate, offset: i64) -> String {
    let date = today + Duration::days(offset);
    let weekday = date.format("%A");
    match offset {
        0 => format!("{weekday} (Today)"),
        1 => format!("{weekday} (Tomorrow)"),
        _ => weekday.to_string(),
    }
}

/// Reduce an ordered `(day_offset, sample)` series into a labeled trend.
///
/// `today` is passed in explicitly so the reduction stays deterministic;
/// callers supply the current local date. Input order is preserved and
/// `None` samples (missing forecast slots) are dropped.
pub fn reduce_forecast(
    today: NaiveDate,
    samples: &[(i64, Option<WeatherSample>)],
    mode: ScoringMode,
    tolerance: RiskTolerance,
) -> Vec<DayOutlook> {
    samples
        .iter()
        .filter_map(|(offset, sample)| {
            let sample = sample.as_ref()?;
            let breakdown = calculate_score(sample, mode);
            Some(DayOutlook {
                day_label: day_label(today, *offset),
                score: breakdown.total,
                guidance: classify(breakdown.total, tolerance),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::GuidanceLabel;

    fn monday() -> NaiveDate {
        // 2026-08-24 is a Monday.
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    fn calm() -> WeatherSample {
        WeatherSample::new(20.0, 0.0, 0.0)
    }

    fn stormy() -> WeatherSample {
        WeatherSample::new(12.0, 15.0, 12.0)
    }

    #[test]
    fn missing_slots_are_skipped_and_order_preserved() {
        let series = vec![
            (0, Some(calm())),
            (1, Some(stormy())),
            (2, Some(calm())),
            (3, None),
            (4, Some(calm())),
        ];
        let trend = reduce_forecast(monday(), &series, ScoringMode::Rule, RiskTolerance::Medium);

        assert_eq!(trend.len(), 4);
        assert_eq!(trend[0].day_label, "Monday (Today)");
        assert_eq!(trend[1].day_label, "Tuesday (Tomorrow)");
        assert_eq!(trend[2].day_label, "Wednesday");
        // Offset 3 (Thursday) skipped; Friday follows in order.
        assert_eq!(trend[3].day_label, "Friday");
    }

    #[test]
    fn days_are_scored_independently() {
        let series = vec![(0, Some(stormy())), (1, Some(calm()))];
        let trend = reduce_forecast(monday(), &series, ScoringMode::Rule, RiskTolerance::Medium);

        assert_eq!(trend[0].guidance.label, GuidanceLabel::Reschedule);
        assert_eq!(trend[1].score, 0);
        assert_eq!(trend[1].guidance.label, GuidanceLabel::Keep);
    }

    #[test]
    fn empty_series_reduces_to_empty_trend() {
        let trend = reduce_forecast(monday(), &[], ScoringMode::Model, RiskTolerance::Low);
        assert!(trend.is_empty());
    }

    #[test]
    fn labels_wrap_across_the_week() {
        let series: Vec<_> = (0..8).map(|d| (d, Some(calm()))).collect();
        let trend = reduce_forecast(monday(), &series, ScoringMode::Rule, RiskTolerance::Medium);
        assert_eq!(trend[6].day_label, "Sunday");
        assert_eq!(trend[7].day_label, "Monday");
    }
}
