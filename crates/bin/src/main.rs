//! Folio CLI binary.
//!
//! Terminal front-end for the portfolio analytics pipeline.

mod integration;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use folio::{NseUniverse, Portfolio, Universe};
use folio_data::YahooCloseProvider;
use folio_report::{ExportFormat, Exporter, export_report, to_ascii_table, to_markdown};
use indicatif::{ProgressBar, ProgressStyle};
use integration::pipeline::run_analysis;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio: portfolio analytics and performance reports", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a weighted portfolio and export its performance report
    Analyze {
        /// Ticker symbols, comma separated (e.g. RELIANCE.NS,TCS.NS)
        #[arg(long, value_delimiter = ',')]
        tickers: Vec<String>,

        /// Portfolio weights, comma separated; defaults to equal weights
        #[arg(long, value_delimiter = ',')]
        weights: Option<Vec<f64>>,

        /// Analysis start date (capped at today)
        #[arg(long, default_value = "2016-01-01")]
        start: NaiveDate,

        /// Report title
        #[arg(long, default_value = "Portfolio Performance Report")]
        title: String,

        /// Output path for the patched HTML report
        #[arg(long, default_value = "portfolio_report.html")]
        output: PathBuf,

        /// Also export the return series (format from .csv/.json extension)
        #[arg(long)]
        export: Option<PathBuf>,

        /// Terminal output format (text or markdown)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List the candidate NSE universe
    Universe {
        /// Only show the default selection
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            tickers,
            weights,
            start,
            title,
            output,
            export,
            format,
        } => {
            analyze(tickers, weights, start, &title, &output, export, &format).await?;
        }
        Commands::Universe { default } => {
            list_universe(default);
        }
    }

    Ok(())
}

async fn analyze(
    tickers: Vec<String>,
    weights: Option<Vec<f64>>,
    start: NaiveDate,
    title: &str,
    output: &Path,
    export: Option<PathBuf>,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    // Both user-facing input errors surface here, before any fetch.
    let portfolio = match weights {
        Some(weights) => Portfolio::new(tickers, weights)?,
        None => Portfolio::equal_weighted(tickers)?,
    };

    let today = Utc::now().date_naive();
    let start = effective_start(start, today);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Fetching data and computing analytics...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let provider = YahooCloseProvider::new()?;
    let result = run_analysis(&provider, portfolio, start, today).await?;

    spinner.finish_and_clear();

    match format {
        "text" => print!("{}", to_ascii_table(&result, title)),
        "markdown" => print!("{}", to_markdown(&result, title)),
        other => return Err(format!("unknown output format: {other}").into()),
    }

    export_report(&result, title, output)?;
    println!("\nReport written to {}", output.display());

    if let Some(path) = export {
        let export_format = ExportFormat::from_path(&path)?;
        result.returns.export_to_file(&path, export_format)?;
        println!("Return series written to {}", path.display());
    }

    println!("Analysis complete! Explore your portfolio metrics above.");

    Ok(())
}

/// Cap the requested start date at today; a future start collapses to today.
fn effective_start(start: NaiveDate, today: NaiveDate) -> NaiveDate {
    start.min(today)
}

fn list_universe(default_only: bool) {
    if default_only {
        for symbol in NseUniverse::default_selection() {
            println!("{}", symbol);
        }
        return;
    }

    let universe = NseUniverse::new();
    println!("Candidate universe ({} symbols):", universe.size());
    for symbol in universe.symbols() {
        println!("  {}", symbol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_start_date_capped_at_today() {
        let today = date(2026, 8, 30);

        assert_eq!(effective_start(date(2016, 1, 1), today), date(2016, 1, 1));
        assert_eq!(effective_start(date(2030, 1, 1), today), today);
        assert_eq!(effective_start(today, today), today);
    }
}
