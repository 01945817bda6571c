use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cpap_tracker::config::Settings;
use cpap_tracker::store::SqliteSlots;
use cpap_tracker::{EntryStore, StoreWriter, Tracker, UsageRecord};

#[derive(Debug, Parser)]
#[command(name = "cpap-tracker", version, about = "Record CPAP usage")]
struct Cli {
    /// Path to a config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the data file (overrides config)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Save a usage event (defaults to now)
    Add {
        /// Date, e.g. 2024-01-01
        #[arg(long)]
        date: Option<String>,
        /// Time, e.g. 22:00
        #[arg(long)]
        time: Option<String>,
        /// Save even if the existing data could not be read (replaces it)
        #[arg(long)]
        force: bool,
    },
    /// Show saved entries
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let mut settings = Settings::load(cli.config.as_deref())?;
    settings.merge_cli(cli.db);

    let slots = SqliteSlots::open(&settings.data_path)
        .with_context(|| format!("Failed to open data file: {:?}", settings.data_path))?;
    let mut tracker = Tracker::start(StoreWriter::spawn(EntryStore::new(slots))).await;

    if let Some(warning) = tracker.warning() {
        eprintln!("warning: {}", warning);
    }

    let result = match cli.command {
        Command::Add { force, .. } if !tracker.can_record(force) => {
            Err(anyhow!(
                "existing entries could not be read; pass --force to replace them"
            ))
        }
        Command::Add { date, time, .. } => {
            let now = UsageRecord::now();
            let record = UsageRecord::new(date.unwrap_or(now.date), time.unwrap_or(now.time));
            let saved = tracker
                .record(record.clone())
                .await
                .context("Failed to save CPAP usage");
            if saved.is_ok() {
                println!("Saved {}  {}", record.date(), record.time());
            }
            saved
        }
        Command::List => {
            print_entries(&tracker);
            Ok(())
        }
    };

    tracker.shutdown().await;
    result
}

fn print_entries(tracker: &Tracker) {
    let entries = tracker.entries();
    if entries.is_empty() {
        println!("No entries yet.");
        return;
    }
    println!("Saved Entries");
    for entry in entries {
        println!("{:<12}{}", entry.date(), entry.time());
    }
}

fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cpap_tracker=debug")
    } else {
        EnvFilter::new("cpap_tracker=info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
