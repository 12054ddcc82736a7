// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_t      = value_t * multiplier + EMA_{t-1} * (1 - multiplier)
//
// The first EMA value is seeded with the SMA of the first `period` values
// (standard warm-up policy), so the series is defined from index
// `period - 1` onward.
// =============================================================================

/// Compute the index-aligned EMA series for `values`.
///
/// # Edge cases
/// - `period == 0` => all `None`
/// - `values.len() < period` => all `None`
pub fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let opts: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
    ema_series_aligned(&opts, period)
}

/// EMA over a series with a leading `None` prefix (e.g. the MACD line, whose
/// own warm-up leaves the head of the series undefined).
///
/// The warm-up counts from the first present element: the seed is the SMA of
/// the first `period` present values, attached at the index where the seed
/// window ends. A `None` *after* the series has started would poison every
/// later value, so production stops there rather than emitting numbers based
/// on a broken history.
pub fn ema_series_aligned(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 {
        return out;
    }
    let Some(start) = values.iter().position(Option::is_some) else {
        return out;
    };
    if values.len() - start < period {
        return out;
    }

    // Seed: SMA of the first `period` present values.
    let mut sum = 0.0;
    for v in &values[start..start + period] {
        match v {
            Some(x) => sum += x,
            None => return out,
        }
    }
    let mut ema = sum / period as f64;
    out[start + period - 1] = Some(ema);

    let multiplier = 2.0 / (period as f64 + 1.0);
    for i in start + period..values.len() {
        let Some(v) = values[i] else {
            return out;
        };
        ema = v * multiplier + ema * (1.0 - multiplier);
        out[i] = Some(ema);
    }
    out
}
