// =============================================================================
// Event Detector
// =============================================================================
//
// Scans the indicator table for "notable event" days using two independent
// rules:
//
//   * Price move  — |pct_chg| > 5%            => 大涨 (LargeGain) / 大跌 (LargeLoss)
//   * Volume spike — volume > 3x the 5-day    => 巨量 (VolumeSpike)
//                    average ending yesterday
//
// When a date trips both rules the price-move reason wins. The merge makes
// that deterministic: price-move entries are collected first, the combined
// list is stable-sorted by date, and a first-occurrence-wins dedup removes
// the volume duplicate. Only the chronologically last 10 events survive, in
// ascending date order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::IndicatorRow;

/// Absolute pct_chg above which a day counts as a large price move.
pub const PRICE_MOVE_THRESHOLD: f64 = 5.0;

/// Volume must exceed this multiple of the lagged 5-day average volume.
pub const VOLUME_SPIKE_RATIO: f64 = 3.0;

/// Maximum number of events reported.
pub const MAX_EVENTS: usize = 10;

/// Why a day was flagged. Serialized with the Chinese labels the downstream
/// report consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventReason {
    #[serde(rename = "大涨")]
    LargeGain,
    #[serde(rename = "大跌")]
    LargeLoss,
    #[serde(rename = "巨量")]
    VolumeSpike,
}

impl std::fmt::Display for EventReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LargeGain => write!(f, "大涨"),
            Self::LargeLoss => write!(f, "大跌"),
            Self::VolumeSpike => write!(f, "巨量"),
        }
    }
}

/// One flagged day.
///
/// `rsi` is the indicator value at that date and stays `None` when the RSI
/// had not warmed up — the assembler substitutes 0 in the serialized output,
/// but the detector itself never loses the distinction.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub date: NaiveDate,
    pub pct_chg: f64,
    pub close: f64,
    pub reason: EventReason,
    pub rsi: Option<f64>,
}

/// Run both detection rules over the indicator table and return at most
/// [`MAX_EVENTS`] deduplicated events in ascending date order.
pub fn detect_events(rows: &[IndicatorRow]) -> Vec<Event> {
    // Price-move entries first: the stable sort below preserves relative
    // order within a date, so they win the dedup against volume spikes.
    let mut flagged: Vec<Event> = Vec::new();

    for row in rows {
        if row.bar.pct_chg > PRICE_MOVE_THRESHOLD || row.bar.pct_chg < -PRICE_MOVE_THRESHOLD {
            let reason = if row.bar.pct_chg > PRICE_MOVE_THRESHOLD {
                EventReason::LargeGain
            } else {
                EventReason::LargeLoss
            };
            flagged.push(event_from_row(row, reason));
        }
    }

    for row in rows {
        if let Some(baseline) = row.vol_ma5_lag1 {
            if baseline > 0.0 && row.bar.volume > VOLUME_SPIKE_RATIO * baseline {
                flagged.push(event_from_row(row, EventReason::VolumeSpike));
            }
        }
    }

    flagged.sort_by_key(|e| e.date);
    flagged.dedup_by_key(|e| e.date);

    let skip = flagged.len().saturating_sub(MAX_EVENTS);
    let events: Vec<Event> = flagged.into_iter().skip(skip).collect();
    debug!(events = events.len(), "Event scan complete");
    events
}

fn event_from_row(row: &IndicatorRow, reason: EventReason) -> Event {
    Event {
        date: row.bar.date,
        pct_chg: row.bar.pct_chg,
        close: row.bar.close,
        reason,
        rsi: row.rsi,
    }
}
