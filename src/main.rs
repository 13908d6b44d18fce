//! Tradecheck - headless batch trade validation
//!
//! Reads a JSON array of trades, validates every trade against the
//! configured rule set and prints one JSON report per trade. Exits non-zero
//! when any trade failed validation.
//!
//! # Usage
//! ```sh
//! VALIDATOR_CUSTOMERS=PLUTO1,PLUTO2 cargo run -- trades.json
//! ```
//!
//! # Environment Variables
//! - `VALIDATOR_LEGAL_ENTITIES` - Allowed legal entities (default: CS Zurich)
//! - `VALIDATOR_CUSTOMERS` - Allowed customers (default: PLUTO1,PLUTO2)
//! - `VALIDATOR_SPOT_REFERENCE_DATE` - Reference date for spot/forward checks
//! - `VALIDATOR_WEEKEND_DAYS` - Non-working weekdays (default: SATURDAY,SUNDAY)

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

use tradecheck::application::bootstrap::ValidationApp;
use tradecheck::config::Config;
use tradecheck::domain::trade::Trade;
use tradecheck::infrastructure::holidays::NoHolidayService;

#[derive(Parser)]
#[command(name = "tradecheck", version, about = "Validate FX trades against the configured rule set")]
struct Cli {
    /// Path to a JSON file containing an array of trades
    trades_file: PathBuf,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let app = ValidationApp::build(&config, Arc::new(NoHolidayService));
    info!("Active rules: {:?}", app.rule_names());

    let raw = std::fs::read_to_string(&cli.trades_file)
        .with_context(|| format!("Failed to read {}", cli.trades_file.display()))?;
    let trades: Vec<Trade> =
        serde_json::from_str(&raw).context("Trades file should contain a JSON array of trades")?;
    info!("Validating {} trade(s)", trades.len());

    let engine = app.engine();
    let outcomes = engine.validate_bulk(trades).await;

    let mut failed = 0usize;
    let mut rendered = Vec::with_capacity(outcomes.len());
    for (index, outcome) in outcomes.iter().enumerate() {
        // The engine only refuses work while shutting down, which a batch
        // run never triggers; map it to a hard error all the same.
        let report = outcome
            .as_ref()
            .map_err(|e| anyhow::anyhow!("Trade {}: {}", index, e))?;
        if report.has_errors() {
            failed += 1;
        }
        rendered.push(json!({
            "trade": index,
            "validTrade": !report.has_errors(),
            "fieldErrors": report.field_errors(),
        }));
    }

    let output = if cli.pretty {
        serde_json::to_string_pretty(&rendered)?
    } else {
        serde_json::to_string(&rendered)?
    };
    println!("{output}");

    info!("{} of {} trade(s) failed validation", failed, outcomes.len());
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
