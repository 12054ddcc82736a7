// =============================================================================
// Series Loader
// =============================================================================
//
// Turns a raw collection of daily bar records (as received from the caller,
// typically a JSON array of database rows) into a clean `Series`:
//
//   1. Parse `trade_date` ("YYYYMMDD") into a calendar date.
//   2. Stable-sort ascending by date.
//   3. Deduplicate by date — when two input records share a date, the one
//      that appeared later in the input wins.
//
// Every bar is validated on the way in: an unparseable date or a non-finite
// numeric field aborts the load before any output is produced.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Date format used by the input feed and all serialized output.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// One raw bar record as supplied by the caller.
///
/// Unknown fields (e.g. `ts_code` on full database rows) are ignored.
/// `pct_chg` may be absent or null; it is normalised to 0 during loading.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBar {
    pub trade_date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub vol: f64,
    #[serde(default)]
    pub pct_chg: Option<f64>,
}

/// One validated trading day. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    /// Day-over-day percentage change; 0.0 when the feed omitted it.
    pub pct_chg: f64,
}

/// Errors produced while loading a series.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The caller supplied no bars at all. This is the one error the
    /// pipeline reports as a structured response rather than a failure.
    #[error("no bars supplied")]
    EmptyInput,

    /// A record carried a `trade_date` that is not a valid YYYYMMDD date.
    #[error("unparseable trade_date {raw:?}")]
    MalformedDate {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A record carried a NaN or infinite price/volume field.
    #[error("non-finite {field} on {date}")]
    NonFiniteField { date: String, field: &'static str },
}

/// An ordered run of bars, strictly increasing by date, no duplicates.
#[derive(Debug, Clone)]
pub struct Series {
    bars: Vec<Bar>,
}

impl Series {
    /// Validate, sort, and deduplicate raw records into a `Series`.
    ///
    /// # Errors
    /// - [`LoadError::EmptyInput`] when `raw` is empty.
    /// - [`LoadError::MalformedDate`] / [`LoadError::NonFiniteField`] on the
    ///   first invalid record — the load is all-or-nothing.
    pub fn load(raw: Vec<RawBar>) -> Result<Self, LoadError> {
        if raw.is_empty() {
            return Err(LoadError::EmptyInput);
        }

        let mut bars = Vec::with_capacity(raw.len());
        for record in raw {
            bars.push(parse_bar(record)?);
        }

        // Stable sort: records with equal dates keep their input order, so
        // the later input record is the later element after sorting.
        bars.sort_by_key(|b| b.date);

        // Last-wins dedup over the now-sorted run.
        let mut deduped: Vec<Bar> = Vec::with_capacity(bars.len());
        for bar in bars {
            match deduped.last_mut() {
                Some(prev) if prev.date == bar.date => *prev = bar,
                _ => deduped.push(bar),
            }
        }

        debug!(bars = deduped.len(), "Series loaded");
        Ok(Self { bars: deduped })
    }

    /// All bars, oldest first.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Validate a single raw record.
fn parse_bar(record: RawBar) -> Result<Bar, LoadError> {
    let date = NaiveDate::parse_from_str(&record.trade_date, DATE_FORMAT).map_err(|source| {
        LoadError::MalformedDate {
            raw: record.trade_date.clone(),
            source,
        }
    })?;

    let fields: [(&'static str, f64); 6] = [
        ("open", record.open),
        ("high", record.high),
        ("low", record.low),
        ("close", record.close),
        ("vol", record.vol),
        ("pct_chg", record.pct_chg.unwrap_or(0.0)),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(LoadError::NonFiniteField {
                date: record.trade_date.clone(),
                field,
            });
        }
    }

    Ok(Bar {
        date,
        open: record.open,
        high: record.high,
        low: record.low,
        close: record.close,
        volume: record.vol,
        pct_chg: record.pct_chg.unwrap_or(0.0),
    })
}
