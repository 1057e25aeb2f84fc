//! Printer-Status main entry point
//!
//! This is the command-line interface for the printer status scraper.

use anyhow::{bail, Context};
use clap::Parser;
use printer_status::config::{load_config_with_hash, validate, Config};
use printer_status::output::print_report;
use printer_status::printer::PrinterScraper;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Printer-Status: reads tray and consumable levels from printer web pages
///
/// Either pass a printer address directly or a TOML file listing several
/// printers. Each printer's status and topbar pages are fetched concurrently
/// and reported as labeled lines.
#[derive(Parser, Debug)]
#[command(name = "printer-status")]
#[command(version)]
#[command(about = "Reads tray and consumable levels from printer web pages", long_about = None)]
struct Cli {
    /// Printer base address (e.g., http://192.168.0.11)
    #[arg(value_name = "ADDRESS", required_unless_present = "config")]
    address: Option<String>,

    /// Path to a TOML configuration file listing printers
    #[arg(short, long, value_name = "FILE", conflicts_with = "address")]
    config: Option<PathBuf>,

    /// Number of concurrent fetch workers
    #[arg(long)]
    workers: Option<usize>,

    /// Per-request timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Printer model for ADDRESS
    #[arg(long, conflicts_with = "config")]
    model: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    let mut failures = 0;
    for printer in &config.printers {
        let scraper = PrinterScraper::new(config.fetcher.settings(), &printer.model)
            .with_context(|| format!("Cannot set up scraper for '{}'", printer.name))?;

        match scraper.scrape(&printer.address).await {
            Ok(snapshot) => {
                print_report(&printer.name, &snapshot);
                println!();
            }
            Err(e) => {
                tracing::error!(printer = %printer.name, "Scrape failed: {}", e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!(
            "{} of {} printers could not be read",
            failures,
            config.printers.len()
        );
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("printer_status=info,warn"),
            1 => EnvFilter::new("printer_status=debug,info"),
            2 => EnvFilter::new("printer_status=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Builds the run configuration from the file or the positional address,
/// then applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match (&cli.config, &cli.address) {
        (Some(path), _) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        (None, Some(address)) => {
            let mut config = Config::for_address(address);
            if let Some(model) = &cli.model {
                config.printers[0].model = model.clone();
            }
            config
        }
        (None, None) => bail!("Either ADDRESS or --config is required"),
    };

    if let Some(workers) = cli.workers {
        config.fetcher.worker_count = workers;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.fetcher.request_timeout_ms = timeout_ms;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}
