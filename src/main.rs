// src/main.rs
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod leave_parser;
mod week;
mod weekly_summary;
mod workbook;

use leave_parser::LeaveObservation;

/// Summarises a leave-dates spreadsheet into weekly leave totals ready to
/// paste back into a spreadsheet.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Spreadsheet whose first column lists the leave dates
    workbook: PathBuf,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays exactly the pasteable report.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Setting tracing subscriber failed")?;

    let cli = Cli::parse();

    let cells = workbook::read_first_column(&cli.workbook)
        .with_context(|| format!("failed to read workbook '{}'", cli.workbook.display()))?;
    info!("Read {} cells from '{}'", cells.len(), cli.workbook.display());

    let observations: Vec<LeaveObservation> = cells
        .iter()
        .flat_map(|cell| leave_parser::parse_cell(cell))
        .collect();
    info!("Parsed {} leave observations", observations.len());

    let series = weekly_summary::summarise(&observations)?;

    println!(
        "Copy the following line and paste it into week {} of {} and then \"Split text to columns\" to populate the cells",
        series.first.week, series.first.year
    );

    let mut writer = csv::Writer::from_writer(io::stdout());
    writer
        .write_record(series.to_row())
        .context("writing weekly totals")?;
    writer.flush().context("flushing weekly totals")?;

    Ok(())
}
