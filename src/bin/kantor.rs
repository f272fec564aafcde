//! kantor CLI - fetch NBP mid-rates, export them and browse them interactively
//!
//! ## Example Usage
//!
//! ```bash
//! # Fetch the default 30-day window and enter the menu
//! kantor
//!
//! # Narrower window, custom output locations
//! kantor --days 7 -o rates.csv --selected-output picks.csv
//! ```

use chrono::{Duration, Local};
use clap::Parser;
use colored::Colorize;
use kantor::currency::{CROSS_RATES, FETCHED_CURRENCIES};
use kantor::data::sources::NbpRateSource;
use kantor::data::table::RateTableBuilder;
use kantor::{export, menu};
use std::path::PathBuf;

const NBP_BASE_URL: &str = "https://api.nbp.pl/api/exchangerates/rates/a";

/// kantor: NBP exchange-rate monitor
#[derive(Parser)]
#[command(name = "kantor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fetches NBP daily mid-rates, derives cross-rates and summarizes them", long_about = None)]
struct Cli {
    /// NBP API base URL
    #[arg(long, default_value = NBP_BASE_URL)]
    base_url: String,

    /// Size of the rate window in days, ending today
    #[arg(short = 'd', long, default_value_t = 30)]
    days: i64,

    /// Output file for the full table
    #[arg(short = 'o', long, default_value = "all_currency_data.csv")]
    output: PathBuf,

    /// Output file for selected-column exports
    #[arg(long, default_value = "selected_currency_data.csv")]
    selected_output: PathBuf,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // A fetch failure is reported, not signalled: the process exits 0 either
    // way, it just never reaches the interactive menu.
    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "error:".red().bold(), e);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let end = Local::now().date_naive();
    let start = end - Duration::days(cli.days);

    let source = NbpRateSource::with_base_url(cli.base_url)?;
    let series = source
        .fetch_window(&FETCHED_CURRENCIES, start, end)
        .await?;

    let mut builder = RateTableBuilder::new();
    for (numerator, denominator) in CROSS_RATES {
        builder = builder.derive_cross_rate(numerator, denominator);
    }
    let table = builder.build(series)?;

    export::export_all(&table, &cli.output)?;
    println!("{}", "Initialized successfully!".green());
    println!("All currency data has been saved!\n");

    menu::run(&table, &cli.selected_output)?;
    Ok(())
}
