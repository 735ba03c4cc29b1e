//! Itineraries CLI
//!
//! Command-line interface for the itinerary sorting API.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use itineraries_client::SortClient;
use itineraries_types::domain::Itinerary;

#[derive(Parser)]
#[command(name = "itineraries")]
#[command(author, version, about = "Itinerary sorting API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the sorting API
    #[arg(
        long,
        env = "ITINERARIES_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available sorting algorithms
    Algorithms,
    /// Sort itineraries from a JSON file
    Sort {
        /// Sorting algorithm to apply (see `algorithms`)
        #[arg(long)]
        algorithm: String,
        /// Path to a JSON array of itineraries
        #[arg(long)]
        file: PathBuf,
    },
    /// Check API health
    Health,
}

fn read_itineraries(path: &PathBuf) -> Result<Vec<Itinerary>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid itineraries in {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = SortClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Algorithms => {
            let algorithms = client.algorithms().await?;
            println!("{}", serde_json::to_string_pretty(&algorithms)?);
        }

        Commands::Sort { algorithm, file } => {
            let itineraries = read_itineraries(&file)?;
            let sorted = client.sort(&algorithm, itineraries).await?;
            println!("{}", serde_json::to_string_pretty(&sorted)?);
        }
    }

    Ok(())
}
