// =============================================================================
// Result Assembler
// =============================================================================
//
// Builds the caller-facing result shape:
//
//   { "latest": { ...final-row snapshot... }, "events": [ ...max 10... ] }
//
// Missing indicators in `latest` serialize as JSON null so callers can tell
// "no value" from zero. Event records are the one place where a missing RSI
// becomes 0 — that asymmetry is part of the contract, not an accident.

use serde::Serialize;
use thiserror::Error;

use crate::analysis::IndicatorRow;
use crate::events::{Event, EventReason};
use crate::series::DATE_FORMAT;

/// Errors produced while assembling the report.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// No indicator rows to snapshot. Unreachable through the normal
    /// pipeline — the loader rejects empty input first.
    #[error("no rows available for the latest-status snapshot")]
    InsufficientData,
}

/// Snapshot of the most recent trading day's key indicators.
#[derive(Debug, Clone, Serialize)]
pub struct LatestStatus {
    pub date: String,
    pub close: f64,
    pub ma5: Option<f64>,
    pub ma20: Option<f64>,
    pub ma60: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub volatility: Option<f64>,
    pub pct_chg: f64,
}

/// One serialized event entry.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub date: String,
    pub pct_chg: f64,
    pub close: f64,
    pub reason: EventReason,
    /// RSI at the event date; 0 when the indicator had not warmed up.
    pub rsi: f64,
}

/// The full pipeline output.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub latest: LatestStatus,
    pub events: Vec<EventRecord>,
}

/// Assemble the final report from the indicator table and detected events.
///
/// # Errors
/// [`AssembleError::InsufficientData`] when `rows` is empty.
pub fn assemble(rows: &[IndicatorRow], events: &[Event]) -> Result<AnalysisReport, AssembleError> {
    let last = rows.last().ok_or(AssembleError::InsufficientData)?;

    let latest = LatestStatus {
        date: last.bar.date.format(DATE_FORMAT).to_string(),
        close: last.bar.close,
        ma5: last.ma5,
        ma20: last.ma20,
        ma60: last.ma60,
        rsi: last.rsi,
        macd: last.macd,
        volatility: last.volatility,
        pct_chg: last.bar.pct_chg,
    };

    let events = events
        .iter()
        .map(|e| EventRecord {
            date: e.date.format(DATE_FORMAT).to_string(),
            pct_chg: e.pct_chg,
            close: e.close,
            reason: e.reason,
            rsi: e.rsi.unwrap_or(0.0),
        })
        .collect();

    Ok(AnalysisReport { latest, events })
}
