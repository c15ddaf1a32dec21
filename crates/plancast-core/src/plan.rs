//! Plans and their frozen historical score snapshots.
//!
//! A plan references a place and a scheduled time. Once that time has
//! passed, the disruption scores computed for it become historical facts:
//! they are recorded at most once per scoring mode and never overwritten
//! by a later, possibly different, live forecast.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PlanError;
use crate::scoring::ScoringMode;

/// A planned activity at a location and time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    /// When the plan takes place.
    pub scheduled_at: DateTime<Utc>,
    /// Rule-mode score frozen after the plan elapsed.
    pub saved_rule_score: Option<i64>,
    /// Model-mode score frozen after the plan elapsed.
    pub saved_model_score: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    /// Create a new plan with a fresh id and no snapshots.
    pub fn new(
        title: impl Into<String>,
        latitude: f64,
        longitude: f64,
        scheduled_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            latitude,
            longitude,
            scheduled_at,
            saved_rule_score: None,
            saved_model_score: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the scheduled time has passed.
    pub fn has_elapsed(&self, now: DateTime<Utc>) -> bool {
        now >= self.scheduled_at
    }

    /// The frozen score stored for a mode, if any.
    ///
    /// The one place that maps a scoring mode to its snapshot field;
    /// callers select the score through this instead of reading fields
    /// conditionally at every display site.
    pub fn saved_score(&self, mode: ScoringMode) -> Option<i64> {
        match mode {
            ScoringMode::Rule => self.saved_rule_score,
            ScoringMode::Model => self.saved_model_score,
        }
    }

    /// Record a score snapshot for a mode, at most once.
    ///
    /// Returns `Ok(true)` when the score was newly recorded and
    /// `Ok(false)` when a snapshot for that mode already exists (the
    /// stored value is left untouched, so repeated calls are idempotent).
    ///
    /// # Errors
    ///
    /// [`PlanError::NotYetElapsed`] when called before `scheduled_at`.
    pub fn record_snapshot(
        &mut self,
        mode: ScoringMode,
        total: i64,
        now: DateTime<Utc>,
    ) -> Result<bool, PlanError> {
        if !self.has_elapsed(now) {
            return Err(PlanError::NotYetElapsed {
                id: self.id.clone(),
                scheduled_at: self.scheduled_at,
            });
        }

        let slot = match mode {
            ScoringMode::Rule => &mut self.saved_rule_score,
            ScoringMode::Model => &mut self.saved_model_score,
        };
        if slot.is_some() {
            return Ok(false);
        }
        *slot = Some(total);
        self.updated_at = now;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn plan_at(scheduled_at: DateTime<Utc>) -> Plan {
        Plan::new("Picnic", 27.95, -82.46, scheduled_at)
    }

    #[test]
    fn snapshot_before_the_scheduled_time_is_rejected() {
        let now = Utc::now();
        let mut plan = plan_at(now + Duration::hours(2));
        let err = plan.record_snapshot(ScoringMode::Rule, 42, now).unwrap_err();
        assert!(matches!(err, PlanError::NotYetElapsed { .. }));
        assert_eq!(plan.saved_rule_score, None);
    }

    #[test]
    fn snapshot_is_recorded_once_and_then_frozen() {
        let now = Utc::now();
        let mut plan = plan_at(now - Duration::hours(1));

        assert!(plan.record_snapshot(ScoringMode::Rule, 42, now).unwrap());
        assert_eq!(plan.saved_rule_score, Some(42));

        // A later call with a different live value must not overwrite.
        assert!(!plan.record_snapshot(ScoringMode::Rule, 77, now).unwrap());
        assert_eq!(plan.saved_rule_score, Some(42));
    }

    #[test]
    fn modes_snapshot_independently() {
        let now = Utc::now();
        let mut plan = plan_at(now);

        assert!(plan.record_snapshot(ScoringMode::Rule, 30, now).unwrap());
        assert_eq!(plan.saved_model_score, None);

        assert!(plan.record_snapshot(ScoringMode::Model, 55, now).unwrap());
        assert_eq!(plan.saved_score(ScoringMode::Rule), Some(30));
        assert_eq!(plan.saved_score(ScoringMode::Model), Some(55));
    }

    #[test]
    fn elapsed_boundary_is_inclusive() {
        let now = Utc::now();
        let plan = plan_at(now);
        assert!(plan.has_elapsed(now));
        assert!(!plan.has_elapsed(now - Duration::seconds(1)));
    }
}
