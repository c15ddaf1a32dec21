//! Settings commands.

use clap::Subcommand;

use plancast_core::Settings;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show all settings
    Show,
    /// Get a settings value by dot-separated key
    Get {
        /// Key, e.g. scoring.mode or units.wind_speed
        key: String,
    },
    /// Set a settings value
    Set {
        /// Key, e.g. guidance.risk_tolerance
        key: String,
        /// New value
        value: String,
    },
    /// Print the settings file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let settings = Settings::load()?;
            println!("{}", toml::to_string_pretty(&settings)?);
        }
        ConfigAction::Get { key } => {
            let settings = Settings::load()?;
            match settings.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown or unset key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut settings = Settings::load()?;
            settings.set(&key, &value)?;
            println!("{key} = {value}");
        }
        ConfigAction::Path => {
            println!("{}", Settings::path()?.display());
        }
    }
    Ok(())
}
