pub mod config;
pub mod forecast;
pub mod location;
pub mod plan;
pub mod score;

use plancast_core::storage::Database;
use plancast_core::Settings;

/// Resolve the coordinates a command should use: explicit flags win, then
/// a saved location by name, then the configured default location.
pub fn resolve_coordinates(
    lat: Option<f64>,
    lon: Option<f64>,
    location: Option<&str>,
    settings: &Settings,
) -> Result<(f64, f64), Box<dyn std::error::Error>> {
    if let (Some(lat), Some(lon)) = (lat, lon) {
        return Ok((lat, lon));
    }
    if let Some(name) = location {
        let db = Database::open()?;
        let found = db.find_location(name)?;
        return Ok((found.latitude, found.longitude));
    }
    if let Some(default) = &settings.location {
        return Ok((default.latitude, default.longitude));
    }
    Err("no coordinates: pass --lat/--lon, --location, or set a default location".into())
}
