//! PriceLens - price tag scanning and offline currency conversion
//!
//! Reads recognized text candidates (one frame per line), extracts the
//! best currency amount, and converts it with a locally cached exchange
//! rate snapshot. The camera and recognition engine are external
//! collaborators; their output is this program's input.

mod app;
mod calculator;
mod capture;
mod config;
mod extract;
mod rates;
mod shared;
mod storage;
mod vision;

use anyhow::{Context, Result};
use clap::Parser;
use parking_lot::RwLock;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::AppConfig;
use crate::rates::{catalog, RateService, RateSnapshot};
use crate::shared::{CurrencyPair, SharedAppState};
use crate::storage::Database;

/// PriceLens - scan price tags, convert currencies offline
#[derive(Parser, Debug)]
#[command(name = "pricelens")]
#[command(about = "Extract currency amounts from recognized text and convert them with cached exchange rates")]
struct Args {
    /// Source currency code (the currency on the tag); persisted
    #[arg(long)]
    from: Option<String>,

    /// Destination currency code; persisted
    #[arg(long)]
    to: Option<String>,

    /// Swap the persisted source/destination pair
    #[arg(long)]
    swap: bool,

    /// Refresh exchange rates from the network before scanning
    #[arg(long)]
    refresh: bool,

    /// List supported currencies and exit
    #[arg(long)]
    list_currencies: bool,

    /// Run the interactive calculator instead of scanning
    #[arg(long)]
    calculator: bool,

    /// Read candidate lines from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Minimum milliseconds between processed frames (0 processes every
    /// line; default follows the configuration)
    #[arg(long)]
    interval_ms: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    if args.list_currencies {
        println!("Supported currencies:");
        for currency in catalog::CATALOG {
            println!(
                "  {} {}  {:<6} {}",
                currency.flag, currency.code, currency.symbol, currency.name
            );
        }
        return Ok(());
    }

    if args.calculator {
        info!("Calculator mode (tokens: digits . + - * / = % n c, q to quit)");
        return app::run_calculator(std::io::stdin().lock());
    }

    let mut config = load_or_create_config();
    if let Some(interval_ms) = args.interval_ms {
        config.scan.process_interval_ms = interval_ms;
    }

    let db = open_database()?;
    let pair = resolve_pair(&args, &config, &db)?;
    info!(
        "Converting {} -> {}",
        pair.source, pair.destination
    );

    // The persisted snapshot is authoritative; the built-in table only
    // covers the gap until the first successful refresh.
    let snapshot = match db.load_snapshot() {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => {
            info!("No persisted rates, using built-in defaults");
            RateSnapshot::default_snapshot()
        }
        Err(e) => {
            warn!("Could not load persisted rates ({}), using built-in defaults", e);
            RateSnapshot::default_snapshot()
        }
    };

    let rates = Arc::new(RateService::new(snapshot, config.rates.endpoint.clone()));

    if args.refresh {
        refresh_rates(&rates, &db);
    }

    {
        let snapshot = rates.current();
        let now = chrono::Utc::now();
        if snapshot.is_outdated_at(now, chrono::Duration::days(config.rates.staleness_days)) {
            warn!(
                "Exchange rates are outdated (captured {})",
                snapshot.age_description(now)
            );
        } else {
            info!("Exchange rates captured {}", snapshot.age_description(now));
        }
    }

    let mut shared_state = SharedAppState::new(config);
    shared_state.pair = pair;
    let shared = Arc::new(RwLock::new(shared_state));

    let input: Box<dyn BufRead + Send> = match args.input {
        Some(path) => {
            let file = std::fs::File::open(&path)
                .with_context(|| format!("Failed to open input file {:?}", path))?;
            Box::new(std::io::BufReader::new(file))
        }
        None => Box::new(std::io::BufReader::new(std::io::stdin())),
    };

    app::run_scanner(input, shared, rates)
}

/// Load configuration from file, writing the defaults on first run
fn load_or_create_config() -> AppConfig {
    if let Ok(config_dir) = storage::get_config_dir() {
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            if let Ok(config) = config::load_config(&config_path) {
                info!("Loaded configuration from {:?}", config_path);
                return config;
            }
            warn!("Could not parse {:?}, using defaults", config_path);
        } else {
            let config = AppConfig::default();
            match config::save_config(&config, &config_path) {
                Ok(()) => info!("Wrote default configuration to {:?}", config_path),
                Err(e) => warn!("Could not write default configuration: {}", e),
            }
            return config;
        }
    }
    info!("Using default configuration");
    AppConfig::default()
}

/// Open the settings database under the data directory
fn open_database() -> Result<Database> {
    let path = storage::get_data_dir()?.join("pricelens.db");
    Database::open(&path)
}

/// Resolve the currency pair: persisted values override the configured
/// defaults, CLI flags override both and are persisted back.
fn resolve_pair(args: &Args, config: &AppConfig, db: &Database) -> Result<CurrencyPair> {
    let (stored_source, stored_destination) = db.load_currency_pair()?;

    let mut pair = CurrencyPair::new(
        stored_source
            .as_deref()
            .unwrap_or(&config.general.source_currency),
        stored_destination
            .as_deref()
            .unwrap_or(&config.general.destination_currency),
    )
    .unwrap_or_default();

    let mut changed = false;

    if let Some(ref from) = args.from {
        let currency = catalog::for_code(from)
            .with_context(|| format!("Unknown source currency {:?}", from))?;
        pair.source = currency.code.to_string();
        changed = true;
    }
    if let Some(ref to) = args.to {
        let currency = catalog::for_code(to)
            .with_context(|| format!("Unknown destination currency {:?}", to))?;
        pair.destination = currency.code.to_string();
        changed = true;
    }
    if args.swap {
        pair.swap();
        changed = true;
    }

    if changed {
        db.save_currency_pair(&pair.source, &pair.destination)?;
    }

    Ok(pair)
}

/// Run one network refresh and persist the result. Failures leave the
/// current snapshot untouched and are reported, not fatal.
fn refresh_rates(rates: &Arc<RateService>, db: &Database) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            warn!("Could not start async runtime for refresh: {}", e);
            return;
        }
    };

    match runtime.block_on(rates.refresh()) {
        Ok(outcome) => {
            info!("Rate refresh: {:?}", outcome);
            if let Err(e) = db.save_snapshot(&rates.current()) {
                warn!("Could not persist refreshed rates: {}", e);
            }
        }
        Err(e) => warn!("Rate refresh failed: {}", e),
    }
}
