//! asset-tracker CLI - interactive hardware inventory
//!
//! Prompts for assets on stdin, saves them to a delimited file and prints a
//! table colored by how close each asset is to end of life.
//!
//! ## Example Usage
//!
//! ```bash
//! # Track assets, saving to ./assets.csv
//! asset-tracker
//!
//! # Save somewhere else, without colors
//! asset-tracker --output /tmp/inventory.csv --no-color
//!
//! # Use a config file with custom lifecycle thresholds
//! asset-tracker --config tracker.toml --verbose
//! ```

use anyhow::Context;
use asset_tracker::config::TrackerConfig;
use asset_tracker::input::InputCollector;
use asset_tracker::inventory::Inventory;
use asset_tracker::store::RecordStore;
use asset_tracker::table::{Lifecycle, TableRow};
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

/// asset-tracker: hardware inventory with per-office currencies
#[derive(Parser)]
#[command(name = "asset-tracker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track company computers and phones", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Export file (overrides the configuration)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the table without colors
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> TrackerConfig {
    let mut config = match TrackerConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Warning:".yellow(), e);
            TrackerConfig::default()
        }
    };
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    config
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli);
    log::debug!("Using configuration {:?}", config);

    let inventory = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        InputCollector::new(stdin.lock(), stdout.lock())
            .collect()
            .context("Failed to read asset input")?
    };

    save(&inventory, &RecordStore::new(&config.output));
    print_table(&inventory, &config).context("Failed to print asset table")?;
    Ok(())
}

/// Export failures are reported and the run continues
fn save(inventory: &Inventory, store: &RecordStore) {
    match inventory.export(store) {
        Ok(()) => println!("Assets saved to {}", store.path().display()),
        Err(e) => {
            log::warn!("Export to {} failed: {}", store.path().display(), e);
            println!("An error occurred while saving the file: {}", e);
        }
    }
}

fn paint(row: &TableRow) -> colored::ColoredString {
    match row.lifecycle {
        Lifecycle::Critical => row.text.red(),
        Lifecycle::Warning => row.text.yellow(),
        Lifecycle::Fresh => row.text.white(),
    }
}

fn print_table(inventory: &Inventory, config: &TrackerConfig) -> io::Result<()> {
    let table = inventory.table().with_policy(config.lifecycle);
    let now = chrono::Local::now().naive_local();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", table.header_line())?;
    writeln!(out, "{}", table.underline())?;
    for row in table.rows(now) {
        writeln!(out, "{}", paint(&row))?;
    }
    out.flush()
}
