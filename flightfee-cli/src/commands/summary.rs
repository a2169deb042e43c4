//! Summary command - print the fee report for a plans document

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use flightfee_core::{summarize, Config};

/// Arguments for the default summary run
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Read the plans document from a file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Print cost and hotel details under each plan
    #[arg(short, long)]
    pub breakdown: bool,
}

impl SummaryArgs {
    /// Execute the summary
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let written = match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                tracing::debug!(input = %path.display(), "Reading plans document");
                summarize(BufReader::new(file), &mut out, config, self.breakdown)
            }
            None => {
                tracing::debug!("Reading plans document from stdin");
                summarize(io::stdin().lock(), &mut out, config, self.breakdown)
            }
        }
        .context("Failed to summarize flight fees")?;

        tracing::debug!(plans = written, "Summary complete");
        Ok(())
    }
}
