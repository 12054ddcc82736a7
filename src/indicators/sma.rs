// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// SMA_t = mean(values[t - period + 1 ..= t])
//
// The first `period - 1` output elements are `None` (warm-up). A rolling sum
// keeps the whole series O(n) regardless of the window length.

/// Compute the index-aligned SMA series for `values`.
///
/// # Edge cases
/// - `period == 0` => all `None`
/// - `values.len() < period` => all `None`
pub fn sma_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    let mut sum: f64 = values[..period].iter().sum();
    out[period - 1] = Some(sum / period as f64);

    for i in period..values.len() {
        sum += values[i] - values[i - period];
        out[i] = Some(sum / period as f64);
    }
    out
}

/// SMA over a series that may itself contain missing values.
///
/// A window produces a value only when *all* `period` elements are present;
/// any `None` inside the window makes the output `None`. Used for the slow
/// %K / %D lines of the stochastic, whose raw input has both a warm-up prefix
/// and possible degenerate-window holes.
pub fn sma_of_optional(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    for i in (period - 1)..values.len() {
        let window = &values[i + 1 - period..=i];
        let mut sum = 0.0;
        let mut complete = true;
        for v in window {
            match v {
                Some(x) => sum += x,
                None => {
                    complete = false;
                    break;
                }
            }
        }
        if complete {
            out[i] = Some(sum / period as f64);
        }
    }
    out
}
