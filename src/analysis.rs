// =============================================================================
// Indicator Engine
// =============================================================================
//
// Derives the full per-bar indicator table from a loaded `Series`. Each
// indicator is computed as an independent pure transform over the extracted
// price/volume columns and then zipped back together by index, so no
// computation can accidentally look ahead of its own bar.
//
// Window parameters follow the common daily-chart conventions for A-share
// screening: MA 5/20/60, MACD (12, 26, 9), RSI 14, KDJ (9, 3, 3), Bollinger
// (20, 2), ATR 14, 20-day annualized volatility.

use tracing::debug;

use crate::indicators::atr::atr_series;
use crate::indicators::bollinger::bollinger_series;
use crate::indicators::macd::macd_series;
use crate::indicators::rsi::rsi_series;
use crate::indicators::sma::sma_series;
use crate::indicators::stochastic::kdj_series;
use crate::indicators::volatility::{log_return_series, volatility_series};
use crate::series::{Bar, Series};

pub const MA_FAST: usize = 5;
pub const MA_MID: usize = 20;
pub const MA_SLOW: usize = 60;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;
pub const RSI_PERIOD: usize = 14;
pub const KDJ_FASTK: usize = 9;
pub const KDJ_SLOWK: usize = 3;
pub const KDJ_SLOWD: usize = 3;
pub const BOLL_PERIOD: usize = 20;
pub const BOLL_WIDTH: f64 = 2.0;
pub const ATR_PERIOD: usize = 14;
pub const VOLATILITY_WINDOW: usize = 20;
pub const VOLUME_MA_PERIOD: usize = 5;

/// One bar together with every derived indicator for that day.
///
/// `None` means the indicator has not warmed up yet (or hit a degenerate
/// window) — it is distinct from zero and stays distinct all the way to the
/// serialized output.
#[derive(Debug, Clone)]
pub struct IndicatorRow {
    pub bar: Bar,
    pub ma5: Option<f64>,
    pub ma20: Option<f64>,
    pub ma60: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_hist: Option<f64>,
    pub rsi: Option<f64>,
    pub k: Option<f64>,
    pub d: Option<f64>,
    pub j: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,
    pub atr: Option<f64>,
    pub log_return: Option<f64>,
    pub volatility: Option<f64>,
    /// 5-day average volume ending at the *previous* day. The one-day lag
    /// keeps the volume-spike rule from counting a spike in its own baseline.
    pub vol_ma5_lag1: Option<f64>,
}

/// Compute every indicator column for `series` and return one row per bar.
pub fn compute_indicators(series: &Series) -> Vec<IndicatorRow> {
    let bars = series.bars();
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
    let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();

    let ma5 = sma_series(&closes, MA_FAST);
    let ma20 = sma_series(&closes, MA_MID);
    let ma60 = sma_series(&closes, MA_SLOW);
    let macd = macd_series(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL);
    let rsi = rsi_series(&closes, RSI_PERIOD);
    let kdj = kdj_series(&highs, &lows, &closes, KDJ_FASTK, KDJ_SLOWK, KDJ_SLOWD);
    let boll = bollinger_series(&closes, BOLL_PERIOD, BOLL_WIDTH);
    let atr = atr_series(&highs, &lows, &closes, ATR_PERIOD);
    let log_returns = log_return_series(&closes);
    let volatility = volatility_series(&log_returns, VOLATILITY_WINDOW);
    let vol_ma5_lag1 = lag_one(&sma_series(&volumes, VOLUME_MA_PERIOD));

    let rows: Vec<IndicatorRow> = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| IndicatorRow {
            bar: *bar,
            ma5: ma5[i],
            ma20: ma20[i],
            ma60: ma60[i],
            macd: macd.line[i],
            macd_signal: macd.signal[i],
            macd_hist: macd.histogram[i],
            rsi: rsi[i],
            k: kdj.k[i],
            d: kdj.d[i],
            j: kdj.j[i],
            bb_upper: boll.upper[i],
            bb_middle: boll.middle[i],
            bb_lower: boll.lower[i],
            atr: atr[i],
            log_return: log_returns[i],
            volatility: volatility[i],
            vol_ma5_lag1: vol_ma5_lag1[i],
        })
        .collect();

    debug!(rows = rows.len(), "Indicator table computed");
    rows
}

/// Shift a series forward by one index: output[i] = input[i - 1].
fn lag_one(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    for i in 1..values.len() {
        out[i] = values[i - 1];
    }
    out
}
