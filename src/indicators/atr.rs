// =============================================================================
// Average True Range (ATR) — Wilder's Smoothing Method
// =============================================================================
//
// True Range (TR) for each bar (needs the previous close, so TR exists from
// the second bar on):
//   TR = max(H - L, |H - prevClose|, |L - prevClose|)
//
// ATR is the smoothed average of TR:
//   ATR_0 = SMA of the first `period` TR values
//   ATR_t = (ATR_{t-1} * (period - 1) + TR_t) / period
//
// The first defined value lands at index `period` (TR starts at index 1).
// =============================================================================

/// Compute the index-aligned ATR series over parallel high/low/close slices.
///
/// # Edge cases
/// - `period == 0` or fewer than `period + 1` bars => all `None`
pub fn atr_series(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    debug_assert_eq!(highs.len(), n);
    debug_assert_eq!(lows.len(), n);

    let mut out = vec![None; n];
    if period == 0 || n < period + 1 {
        return out;
    }

    // TR for bars 1..n (index i of `tr` belongs to bar i + 1).
    let mut tr = Vec::with_capacity(n - 1);
    for i in 1..n {
        let hl = highs[i] - lows[i];
        let hc = (highs[i] - closes[i - 1]).abs();
        let lc = (lows[i] - closes[i - 1]).abs();
        tr.push(hl.max(hc).max(lc));
    }

    // Seed with the SMA of the first `period` TR values.
    let mut atr = tr[..period].iter().sum::<f64>() / period as f64;
    out[period] = Some(atr);

    let period_f = period as f64;
    for (i, &t) in tr.iter().enumerate().skip(period) {
        atr = (atr * (period_f - 1.0) + t) / period_f;
        out[i + 1] = Some(atr);
    }
    out
}
