use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rideshare_core::clock::SystemClock;
use rideshare_core::earnings::{driver_summary, passenger_summary, EarningsConfig};
use rideshare_core::{Repository, TripDispatcher};
use rideshare_records::{CsvRecords, DataSourceConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rideshare",
    about = "Load the ride-share ledger from CSV and dispatch trip requests"
)]
struct Cli {
    /// Directory holding drivers.csv, passengers.csv and trips.csv
    #[arg(long, env = "RIDESHARE_DATA_DIR")]
    data_dir: Option<PathBuf>,
    /// JSON config file (data_dir, file names, dispatch policy)
    #[arg(long, env = "RIDESHARE_CONFIG")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a trip for a passenger and report the assigned driver
    Request {
        /// Passenger id
        #[arg(allow_negative_numbers = true)]
        passenger_id: i64,
    },
    /// Report collection sizes and per-driver earnings
    Summary,
}

fn load_config(cli: &Cli) -> Result<DataSourceConfig> {
    let config = match &cli.config {
        Some(path) => DataSourceConfig::from_json_file(path)?,
        None => DataSourceConfig::default(),
    };
    Ok(match &cli.data_dir {
        Some(dir) => config.with_data_dir(dir),
        None => config,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let repository = Repository::load(&CsvRecords::new(&config))
        .with_context(|| format!("loading records from {}", config.data_dir.display()))?;
    info!(
        drivers = repository.drivers().len(),
        passengers = repository.passengers().len(),
        trips = repository.trips().len(),
        "ledger loaded"
    );

    match cli.command {
        Commands::Request { passenger_id } => {
            let mut dispatcher = TripDispatcher::with_clock(repository, config.dispatch, SystemClock);
            let trip = dispatcher
                .request_trip(Some(passenger_id))
                .with_context(|| format!("requesting trip for passenger {passenger_id}"))?;
            info!(
                trip = %trip.id(),
                driver = %trip.driver(),
                passenger = %trip.passenger(),
                start_time = %trip.start_time(),
                "trip dispatched"
            );
        }
        Commands::Summary => {
            let earnings = EarningsConfig::default();
            for driver in repository.drivers() {
                if let Some(summary) = driver_summary(&repository, driver.id(), &earnings) {
                    info!(
                        driver = %driver.id(),
                        status = %driver.status(),
                        trips = summary.completed_trips,
                        average_rating = ?summary.average_rating,
                        revenue = %summary.total_revenue,
                        "driver"
                    );
                }
            }
            for passenger in repository.passengers() {
                if let Some(summary) = passenger_summary(&repository, passenger.id()) {
                    info!(
                        passenger = %passenger.id(),
                        trips = summary.completed_trips,
                        spent = %summary.net_expenditures,
                        seconds = summary.total_time_spent_secs,
                        "passenger"
                    );
                }
            }
        }
    }
    Ok(())
}
