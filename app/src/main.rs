mod cli;
mod export;
mod input;
mod logging;
mod plot;
mod report;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.holdout_config();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_header(&mut out, &cli.input, &config)?;

    let records = input::read_records_from_path(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    info!(records = records.len(), "loaded input");

    let report = holdout::run(records, &config).context("hold-out evaluation failed")?;
    report::write_report(&mut out, &report)?;
    out.flush()?;

    if let Some(path) = &cli.export {
        export::export_to_path(path, &report)
            .with_context(|| format!("failed to export to {}", path.display()))?;
        info!(path = %path.display(), "wrote export");
    }
    if let Some(path) = &cli.plot {
        plot::render(path, &report)
            .with_context(|| format!("failed to plot to {}", path.display()))?;
        info!(path = %path.display(), "wrote plot");
    }
    Ok(())
}
