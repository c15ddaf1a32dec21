//! Maps a disruption score to Keep/Adjust/Reschedule guidance.
//!
//! The user's risk tolerance selects a `(low, high)` threshold pair that
//! partitions [0, 100] into three bands. Band boundaries are inclusive on
//! the lower-scoring side: a total sitting exactly on a threshold belongs
//! to the milder band.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User setting controlling the guidance band thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    /// Cautious: flag disruption early.
    Low,
    #[default]
    Medium,
    /// Hardy: only severe weather warrants a change of plans.
    High,
}

impl RiskTolerance {
    /// The `(low, high)` threshold pair for this tolerance.
    pub fn thresholds(&self) -> (i64, i64) {
        match self {
            RiskTolerance::Low => (25, 50),
            RiskTolerance::Medium => (33, 66),
            RiskTolerance::High => (45, 75),
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTolerance::Low => write!(f, "low"),
            RiskTolerance::Medium => write!(f, "medium"),
            RiskTolerance::High => write!(f, "high"),
        }
    }
}

impl FromStr for RiskTolerance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskTolerance::Low),
            "medium" => Ok(RiskTolerance::Medium),
            "high" => Ok(RiskTolerance::High),
            other => Err(format!(
                "unknown risk tolerance: {other} (expected low, medium or high)"
            )),
        }
    }
}

/// Three-tier guidance label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuidanceLabel {
    Keep,
    Adjust,
    Reschedule,
}

impl GuidanceLabel {
    /// Display color associated with this label.
    pub fn color(&self) -> &'static str {
        match self {
            GuidanceLabel::Keep => "#22c55e",
            GuidanceLabel::Adjust => "#f97316",
            GuidanceLabel::Reschedule => "#ef4444",
        }
    }
}

impl fmt::Display for GuidanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuidanceLabel::Keep => write!(f, "Keep"),
            GuidanceLabel::Adjust => write!(f, "Adjust"),
            GuidanceLabel::Reschedule => write!(f, "Reschedule"),
        }
    }
}

/// Guidance derived purely from a total score and a tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub label: GuidanceLabel,
    pub color: &'static str,
}

/// Classify a clamped total score into a guidance band.
pub fn classify(total: i64, tolerance: RiskTolerance) -> Guidance {
    let (low, high) = tolerance.thresholds();
    let label = if total <= low {
        GuidanceLabel::Keep
    } else if total <= high {
        GuidanceLabel::Adjust
    } else {
        GuidanceLabel::Reschedule
    };
    Guidance {
        label,
        color: label.color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_band_boundaries_belong_to_the_milder_band() {
        assert_eq!(classify(33, RiskTolerance::Medium).label, GuidanceLabel::Keep);
        assert_eq!(classify(34, RiskTolerance::Medium).label, GuidanceLabel::Adjust);
        assert_eq!(classify(66, RiskTolerance::Medium).label, GuidanceLabel::Adjust);
        assert_eq!(
            classify(67, RiskTolerance::Medium).label,
            GuidanceLabel::Reschedule
        );
    }

    #[test]
    fn tolerance_shifts_the_bands() {
        // 40 reads differently depending on tolerance.
        assert_eq!(classify(40, RiskTolerance::Low).label, GuidanceLabel::Adjust);
        assert_eq!(classify(40, RiskTolerance::Medium).label, GuidanceLabel::Adjust);
        assert_eq!(classify(40, RiskTolerance::High).label, GuidanceLabel::Keep);

        assert_eq!(
            classify(60, RiskTolerance::Low).label,
            GuidanceLabel::Reschedule
        );
        assert_eq!(classify(60, RiskTolerance::High).label, GuidanceLabel::Adjust);
    }

    #[test]
    fn extremes_classify_cleanly() {
        assert_eq!(classify(0, RiskTolerance::Low).label, GuidanceLabel::Keep);
        assert_eq!(
            classify(100, RiskTolerance::High).label,
            GuidanceLabel::Reschedule
        );
    }

    #[test]
    fn guidance_carries_the_label_color() {
        let g = classify(10, RiskTolerance::Medium);
        assert_eq!(g.color, "#22c55e");
        let g = classify(90, RiskTolerance::Medium);
        assert_eq!(g.color, "#ef4444");
    }

    #[test]
    fn tolerance_parses_from_str() {
        assert_eq!("low".parse::<RiskTolerance>().unwrap(), RiskTolerance::Low);
        assert_eq!("HIGH".parse::<RiskTolerance>().unwrap(), RiskTolerance::High);
        assert!("extreme".parse::<RiskTolerance>().is_err());
    }
}
