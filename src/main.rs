// =============================================================================
// stocklens — Daily OHLCV indicator & event screening pipeline
// =============================================================================
//
// Reads a JSON array of daily bar records on stdin, runs the analysis
// pipeline (load -> indicators -> events -> report), and prints the result
// JSON on stdout. Designed to be driven by a parent process over pipes, so
// stdout carries nothing but the result; all diagnostics go to stderr.
// =============================================================================

mod analysis;
mod events;
mod indicators;
mod report;
mod series;

use std::io::Read;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::series::{LoadError, RawBar, Series};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    // Nothing on the pipe: produce nothing, succeed quietly.
    if input.trim().is_empty() {
        return Ok(());
    }

    let raw: Vec<RawBar> =
        serde_json::from_str(&input).context("input is not a JSON array of bar records")?;

    let output = analyze(raw)?;
    println!("{output}");
    Ok(())
}

/// Run the full pipeline and return the serialized result.
///
/// An empty bar collection yields the documented `{"error": "No data"}`
/// response; every other failure aborts with no stdout output at all.
fn analyze(raw: Vec<RawBar>) -> Result<String> {
    let series = match Series::load(raw) {
        Ok(series) => series,
        Err(LoadError::EmptyInput) => {
            return Ok(json!({ "error": "No data" }).to_string());
        }
        Err(e) => return Err(e).context("failed to load bar series"),
    };

    let rows = analysis::compute_indicators(&series);
    let events = events::detect_events(&rows);
    let report = report::assemble(&rows, &events).context("failed to assemble report")?;

    info!(
        bars = series.len(),
        events = report.events.len(),
        latest = %report.latest.date,
        "Analysis complete"
    );

    serde_json::to_string(&report).context("failed to serialize report")
}
