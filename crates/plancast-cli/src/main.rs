use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "plancast-cli", version, about = "PlanCast CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a weather sample
    Score {
        #[command(subcommand)]
        action: commands::score::ScoreAction,
    },
    /// Multi-day forecast outlook
    Forecast {
        #[command(subcommand)]
        action: commands::forecast::ForecastAction,
    },
    /// Plan management and score snapshots
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Saved location management
    Location {
        #[command(subcommand)]
        action: commands::location::LocationAction,
    },
    /// Settings management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Score { action } => commands::score::run(action),
        Commands::Forecast { action } => commands::forecast::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Location { action } => commands::location::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
