//! SQLite-backed storage for plans and saved locations.
//!
//! Plans carry their frozen score snapshots in mode-specific columns.
//! The snapshot UPDATE only fires while the column is still NULL, so the
//! at-most-once rule from [`crate::plan`] also holds at the SQL layer.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::data_dir;
use crate::error::{DatabaseError, Result};
use crate::plan::Plan;
use crate::scoring::ScoringMode;

/// A user-saved place that plans and forecasts can reference by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedLocation {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl SavedLocation {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            latitude,
            longitude,
            created_at: Utc::now(),
        }
    }
}

/// SQLite database for plans and locations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/plancast/plancast.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("plancast.db");
        let conn = Connection::open(&path).map_err(|source| DatabaseError::OpenFailed {
            path,
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open a database at an explicit path (used by on-disk tests).
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: impl Into<std::path::PathBuf>) -> Result<Self> {
        let path = path.into();
        let conn = Connection::open(&path).map_err(|source| DatabaseError::OpenFailed {
            path,
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    ///
    /// # Errors
    /// Returns an error if the schema cannot be created.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS plans (
                    id                TEXT PRIMARY KEY,
                    title             TEXT NOT NULL,
                    latitude          REAL NOT NULL,
                    longitude         REAL NOT NULL,
                    scheduled_at      TEXT NOT NULL,
                    saved_rule_score  INTEGER,
                    saved_model_score INTEGER,
                    created_at        TEXT NOT NULL,
                    updated_at        TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS locations (
                    id         TEXT PRIMARY KEY,
                    name       TEXT NOT NULL,
                    latitude   REAL NOT NULL,
                    longitude  REAL NOT NULL,
                    created_at TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_plans_scheduled_at ON plans(scheduled_at);
                CREATE INDEX IF NOT EXISTS idx_locations_name ON locations(name);",
            )
            .map_err(DatabaseError::from)?;
        Ok(())
    }

    // ── Plans ──

    /// Insert a new plan.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn insert_plan(&self, plan: &Plan) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO plans (id, title, latitude, longitude, scheduled_at,
                    saved_rule_score, saved_model_score, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    plan.id,
                    plan.title,
                    plan.latitude,
                    plan.longitude,
                    plan.scheduled_at.to_rfc3339(),
                    plan.saved_rule_score,
                    plan.saved_model_score,
                    plan.created_at.to_rfc3339(),
                    plan.updated_at.to_rfc3339(),
                ],
            )
            .map_err(DatabaseError::from)?;
        Ok(())
    }

    /// Fetch a plan by id.
    ///
    /// # Errors
    /// Returns [`DatabaseError::NotFound`] if no plan has that id.
    pub fn get_plan(&self, id: &str) -> Result<Plan> {
        self.conn
            .query_row(
                "SELECT id, title, latitude, longitude, scheduled_at,
                        saved_rule_score, saved_model_score, created_at, updated_at
                 FROM plans WHERE id = ?1",
                params![id],
                Self::row_to_plan,
            )
            .optional()
            .map_err(DatabaseError::from)?
            .ok_or_else(|| {
                DatabaseError::NotFound {
                    entity: "plan",
                    id: id.to_string(),
                }
                .into()
            })
    }

    /// List all plans ordered by scheduled time.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn list_plans(&self) -> Result<Vec<Plan>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, latitude, longitude, scheduled_at,
                        saved_rule_score, saved_model_score, created_at, updated_at
                 FROM plans ORDER BY scheduled_at",
            )
            .map_err(DatabaseError::from)?;
        let rows = stmt
            .query_map([], Self::row_to_plan)
            .map_err(DatabaseError::from)?;

        let mut plans = Vec::new();
        for row in rows {
            plans.push(row.map_err(DatabaseError::from)?);
        }
        Ok(plans)
    }

    /// Record a frozen score snapshot for a plan and mode.
    ///
    /// The UPDATE is guarded on the column being NULL; returns `true` when
    /// the score was newly recorded, `false` when a snapshot already
    /// existed (the stored value is untouched).
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub fn record_snapshot(&self, plan_id: &str, mode: ScoringMode, total: i64) -> Result<bool> {
        let column = match mode {
            ScoringMode::Rule => "saved_rule_score",
            ScoringMode::Model => "saved_model_score",
        };
        let changed = self
            .conn
            .execute(
                &format!(
                    "UPDATE plans SET {column} = ?1, updated_at = ?2
                     WHERE id = ?3 AND {column} IS NULL"
                ),
                params![total, Utc::now().to_rfc3339(), plan_id],
            )
            .map_err(DatabaseError::from)?;
        Ok(changed > 0)
    }

    /// Delete a plan by id.
    ///
    /// # Errors
    /// Returns [`DatabaseError::NotFound`] if no plan has that id.
    pub fn delete_plan(&self, id: &str) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM plans WHERE id = ?1", params![id])
            .map_err(DatabaseError::from)?;
        if changed == 0 {
            return Err(DatabaseError::NotFound {
                entity: "plan",
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn row_to_plan(row: &rusqlite::Row<'_>) -> rusqlite::Result<Plan> {
        Ok(Plan {
            id: row.get(0)?,
            title: row.get(1)?,
            latitude: row.get(2)?,
            longitude: row.get(3)?,
            scheduled_at: parse_utc(row, 4)?,
            saved_rule_score: row.get(5)?,
            saved_model_score: row.get(6)?,
            created_at: parse_utc(row, 7)?,
            updated_at: parse_utc(row, 8)?,
        })
    }

    // ── Locations ──

    /// Insert a saved location.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn insert_location(&self, location: &SavedLocation) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO locations (id, name, latitude, longitude, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    location.id,
                    location.name,
                    location.latitude,
                    location.longitude,
                    location.created_at.to_rfc3339(),
                ],
            )
            .map_err(DatabaseError::from)?;
        Ok(())
    }

    /// Look up a saved location by name (case-insensitive).
    ///
    /// # Errors
    /// Returns [`DatabaseError::NotFound`] if no location has that name.
    pub fn find_location(&self, name: &str) -> Result<SavedLocation> {
        self.conn
            .query_row(
                "SELECT id, name, latitude, longitude, created_at
                 FROM locations WHERE name = ?1 COLLATE NOCASE",
                params![name],
                Self::row_to_location,
            )
            .optional()
            .map_err(DatabaseError::from)?
            .ok_or_else(|| {
                DatabaseError::NotFound {
                    entity: "location",
                    id: name.to_string(),
                }
                .into()
            })
    }

    /// List all saved locations by name.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn list_locations(&self) -> Result<Vec<SavedLocation>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, name, latitude, longitude, created_at
                 FROM locations ORDER BY name",
            )
            .map_err(DatabaseError::from)?;
        let rows = stmt
            .query_map([], Self::row_to_location)
            .map_err(DatabaseError::from)?;

        let mut locations = Vec::new();
        for row in rows {
            locations.push(row.map_err(DatabaseError::from)?);
        }
        Ok(locations)
    }

    /// Delete a saved location by id.
    ///
    /// # Errors
    /// Returns [`DatabaseError::NotFound`] if no location has that id.
    pub fn delete_location(&self, id: &str) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM locations WHERE id = ?1", params![id])
            .map_err(DatabaseError::from)?;
        if changed == 0 {
            return Err(DatabaseError::NotFound {
                entity: "location",
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn row_to_location(row: &rusqlite::Row<'_>) -> rusqlite::Result<SavedLocation> {
        Ok(SavedLocation {
            id: row.get(0)?,
            name: row.get(1)?,
            latitude: row.get(2)?,
            longitude: row.get(3)?,
            created_at: parse_utc(row, 4)?,
        })
    }
}

fn parse_utc(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let text: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}
