//! Flightfee CLI - Print a flight fee summary from a plans document
//!
//! Reads a JSON document with a `plans` sequence from stdin (or `--input`)
//! and prints one line per plan.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flightfee_core::{Config, ConfigOverrides};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::SummaryArgs;

/// Flightfee: summarize flight plan fees
#[derive(Parser, Debug)]
#[command(name = "flightfee")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a config file (overrides the default location)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Departure city shown in the header
    #[arg(long, global = true)]
    origin: Option<String>,

    /// Arrival city shown in the header
    #[arg(long, global = true)]
    destination: Option<String>,

    /// Currency symbol printed before fees
    #[arg(long, global = true)]
    currency: Option<String>,

    #[command(flatten)]
    summary: SummaryArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let overrides = ConfigOverrides {
        origin: cli.origin.clone(),
        destination: cli.destination.clone(),
        currency_symbol: cli.currency.clone(),
    };
    let config = Config::load_with_overrides(cli.config.as_deref(), overrides)?;

    if cli.verbose {
        tracing::info!(
            origin = %config.route.origin,
            destination = %config.route.destination,
            currency = %config.output.currency_symbol,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("flightfee {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Config) => {
            commands::config::show(&config, cli.config.as_deref());
        }
        None => {
            cli.summary.execute(&config)?;
        }
    }

    Ok(())
}
