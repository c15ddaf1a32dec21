//! Saved location management commands.

use clap::Subcommand;

use plancast_core::storage::Database;
use plancast_core::SavedLocation;

#[derive(Subcommand)]
pub enum LocationAction {
    /// Save a location
    Add {
        /// Location name
        name: String,
        /// Latitude
        #[arg(long)]
        lat: f64,
        /// Longitude
        #[arg(long)]
        lon: f64,
    },
    /// List saved locations
    List,
    /// Delete a saved location
    Delete {
        /// Location ID
        id: String,
    },
}

pub fn run(action: LocationAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        LocationAction::Add { name, lat, lon } => {
            let location = SavedLocation::new(name, lat, lon);
            db.insert_location(&location)?;
            println!("{}", serde_json::to_string_pretty(&location)?);
        }
        LocationAction::List => {
            let locations = db.list_locations()?;
            println!("{}", serde_json::to_string_pretty(&locations)?);
        }
        LocationAction::Delete { id } => {
            db.delete_location(&id)?;
            println!("deleted {id}");
        }
    }
    Ok(())
}
