//! Core error types for plancast-core.
//!
//! The scoring pipeline itself is total over numeric input and has no
//! error states; everything here belongs to the collaborators around it
//! (storage, settings, the forecast provider, plan snapshots).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for plancast-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Forecast provider errors
    #[error("Forecast provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Plan snapshot errors
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Row not found
    #[error("No {entity} found with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Forecast provider errors.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP request failed
    #[error("Forecast request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API responded with a non-success status
    #[error("Forecast API returned status {status}")]
    BadStatus { status: u16 },

    /// Response body did not match the expected shape
    #[error("Malformed forecast response: {0}")]
    MalformedResponse(String),

    /// Failed to start the async runtime backing a blocking fetch
    #[error("Failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Plan snapshot errors.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Snapshots are only taken at or after the scheduled time
    #[error("Plan '{id}' has not elapsed yet (scheduled at {scheduled_at})")]
    NotYetElapsed {
        id: String,
        scheduled_at: chrono::DateTime<chrono::Utc>,
    },
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Database(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
