//! Plan management commands, including historical score snapshots.

use chrono::{DateTime, Utc};
use clap::Subcommand;

use plancast_core::storage::Database;
use plancast_core::{calculate_score, OpenMeteoClient, Plan, ScoringMode, Settings};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Create a new plan
    Add {
        /// Plan title
        title: String,
        /// Scheduled date/time (RFC 3339, e.g. 2026-09-05T14:00:00Z)
        #[arg(long)]
        when: String,
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
    /// List plans
    List,
    /// Get plan details
    Get {
        /// Plan ID
        id: String,
    },
    /// Freeze score snapshots for an elapsed plan
    Snapshot {
        /// Plan ID
        id: String,
    },
    /// Delete a plan
    Delete {
        /// Plan ID
        id: String,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        PlanAction::Add {
            title,
            when,
            lat,
            lon,
            location,
        } => {
            let settings = Settings::load_or_default();
            let (lat, lon) =
                super::resolve_coordinates(lat, lon, location.as_deref(), &settings)?;
            let scheduled_at: DateTime<Utc> =
                DateTime::parse_from_rfc3339(&when)?.with_timezone(&Utc);
            let plan = Plan::new(title, lat, lon, scheduled_at);
            db.insert_plan(&plan)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        PlanAction::List => {
            let plans = db.list_plans()?;
            println!("{}", serde_json::to_string_pretty(&plans)?);
        }
        PlanAction::Get { id } => {
            let plan = db.get_plan(&id)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        PlanAction::Snapshot { id } => {
            let mut plan = db.get_plan(&id)?;
            let now = Utc::now();

            let client = OpenMeteoClient::new();
            let samples = client.fetch_forecast_blocking(plan.latitude, plan.longitude, 1)?;
            let sample = samples
                .first()
                .and_then(|(_, s)| *s)
                .ok_or("forecast has no noon sample to snapshot")?;

            // Both mode scores freeze together; already-recorded modes are
            // left untouched.
            for mode in [ScoringMode::Rule, ScoringMode::Model] {
                let breakdown = calculate_score(&sample, mode);
                let recorded = plan.record_snapshot(mode, breakdown.total, now)?;
                if recorded {
                    db.record_snapshot(&plan.id, mode, breakdown.total)?;
                }
            }

            let stored = db.get_plan(&id)?;
            println!("{}", serde_json::to_string_pretty(&stored)?);
        }
        PlanAction::Delete { id } => {
            db.delete_plan(&id)?;
            println!("deleted {id}");
        }
    }
    Ok(())
}
