// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
//   MACD line = EMA(close, fast) - EMA(close, slow)
//   Signal    = EMA(MACD line, signal)
//   Histogram = MACD line - Signal
//
// With the standard (12, 26, 9) parameters the line becomes defined at index
// 25 (slow EMA warm-up) and the signal/histogram at index 33.

use crate::indicators::ema::{ema_series, ema_series_aligned};

/// The three MACD output series, index-aligned with the input closes.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub line: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Compute the MACD line, signal line, and histogram for `closes`.
pub fn macd_series(closes: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSeries {
    let fast_ema = ema_series(closes, fast);
    let slow_ema = ema_series(closes, slow);

    let line: Vec<Option<f64>> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => Some(f - s),
            _ => None,
        })
        .collect();

    let signal = ema_series_aligned(&line, signal);

    let histogram: Vec<Option<f64>> = line
        .iter()
        .zip(signal.iter())
        .map(|(l, s)| match (l, s) {
            (Some(l), Some(s)) => Some(l - s),
            _ => None,
        })
        .collect();

    MacdSeries {
        line,
        signal,
        histogram,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macd_warmup_indices() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.3).sin()).collect();
        let macd = macd_series(&closes, 12, 26, 9);

        assert_eq!(macd.line.len(), 60);
        assert!(macd.line[24].is_none());
        assert!(macd.line[25].is_some());
        assert!(macd.signal[32].is_none());
        assert!(macd.signal[33].is_some());
        assert!(macd.histogram[32].is_none());
        assert!(macd.histogram[33].is_some());
    }

    #[test]
    fn macd_flat_series_is_zero() {
        let closes = vec![50.0; 60];
        let macd = macd_series(&closes, 12, 26, 9);
        for i in 33..60 {
            assert!(macd.line[i].unwrap().abs() < 1e-10);
            assert!(macd.signal[i].unwrap().abs() < 1e-10);
            assert!(macd.histogram[i].unwrap().abs() < 1e-10);
        }
    }

    #[test]
    fn macd_positive_in_uptrend() {
        // In a steady uptrend the fast EMA sits above the slow EMA.
        let closes: Vec<f64> = (1..=80).map(|x| x as f64).collect();
        let macd = macd_series(&closes, 12, 26, 9);
        let last = macd.line.last().unwrap().unwrap();
        assert!(last > 0.0, "expected positive MACD in uptrend, got {last}");
    }

    #[test]
    fn macd_histogram_is_line_minus_signal() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.7).cos() * 5.0).collect();
        let macd = macd_series(&closes, 12, 26, 9);
        for i in 0..60 {
            match (macd.line[i], macd.signal[i], macd.histogram[i]) {
                (Some(l), Some(s), Some(h)) => {
                    assert!((h - (l - s)).abs() < 1e-10);
                }
                (_, _, h) => assert!(h.is_none()),
            }
        }
    }

    #[test]
    fn macd_short_input_all_missing() {
        let closes: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let macd = macd_series(&closes, 12, 26, 9);
        assert!(macd.line.iter().all(Option::is_none));
        assert!(macd.signal.iter().all(Option::is_none));
        assert!(macd.histogram.iter().all(Option::is_none));
    }
}
