// =============================================================================
// Annualized Historical Volatility
// =============================================================================
//
//   log_return_t = ln(close_t / close_{t-1})
//   volatility_t = stdev(log_return over trailing `window`) * sqrt(252)
//
// The standard deviation uses the sample convention (n - 1 divisor). With the
// default 20-day window the first defined volatility lands at index 20: the
// first bar has no log return, and the window needs 20 returns after that.

/// Trading days per year used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Daily log returns, index-aligned with `closes`. `None` at index 0 and
/// wherever either close is non-positive (the logarithm is undefined there).
pub fn log_return_series(closes: &[f64]) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    for i in 1..closes.len() {
        if closes[i] > 0.0 && closes[i - 1] > 0.0 {
            out[i] = Some((closes[i] / closes[i - 1]).ln());
        }
    }
    out
}

/// Annualized rolling volatility over a log-return series.
///
/// A window produces a value only when all `window` trailing returns are
/// present; a hole (e.g. a non-positive close) leaves the affected windows
/// missing rather than averaging over a shorter run.
pub fn volatility_series(log_returns: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; log_returns.len()];
    if window < 2 || log_returns.len() < window {
        return out;
    }

    for i in (window - 1)..log_returns.len() {
        let slice = &log_returns[i + 1 - window..=i];
        let mut values = Vec::with_capacity(window);
        for v in slice {
            match v {
                Some(x) => values.push(*x),
                None => {
                    values.clear();
                    break;
                }
            }
        }
        if values.len() != window {
            continue;
        }

        let mean = values.iter().sum::<f64>() / window as f64;
        let variance =
            values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (window as f64 - 1.0);
        out[i] = Some(variance.sqrt() * TRADING_DAYS_PER_YEAR.sqrt());
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_return_first_is_missing() {
        let out = log_return_series(&[100.0, 101.0, 102.0]);
        assert!(out[0].is_none());
        assert!((out[1].unwrap() - (101.0f64 / 100.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn log_return_non_positive_close_is_missing() {
        let out = log_return_series(&[100.0, 0.0, 102.0]);
        assert!(out[1].is_none());
        assert!(out[2].is_none());
    }

    #[test]
    fn volatility_warmup_index() {
        // Index 0 has no return, so the 20-return window first fills at 20.
        let closes: Vec<f64> = (0..25).map(|i| 100.0 * 1.01f64.powi(i % 3)).collect();
        let returns = log_return_series(&closes);
        let out = volatility_series(&returns, 20);
        assert!(out[19].is_none());
        assert!(out[20].is_some());
    }

    #[test]
    fn volatility_constant_growth_is_zero() {
        // Constant multiplicative growth => identical log returns => σ = 0.
        let closes: Vec<f64> = (0..30).map(|i| 100.0 * 1.01f64.powi(i)).collect();
        let returns = log_return_series(&closes);
        let out = volatility_series(&returns, 20);
        for v in out.iter().flatten() {
            assert!(v.abs() < 1e-10, "expected zero volatility, got {v}");
        }
    }

    #[test]
    fn volatility_is_non_negative() {
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 + (i as f64 * 0.83).sin() * 7.0)
            .collect();
        let returns = log_return_series(&closes);
        let out = volatility_series(&returns, 20);
        assert!(out.iter().flatten().count() > 0);
        for v in out.iter().flatten() {
            assert!(*v >= 0.0, "volatility must be >= 0, got {v}");
        }
    }

    #[test]
    fn volatility_known_sample_stdev() {
        // Window of two returns ln(2) and ln(0.5) = -ln(2): mean 0, sample
        // variance = 2 * ln(2)^2 / (2 - 1).
        let closes = vec![1.0, 2.0, 1.0];
        let returns = log_return_series(&closes);
        let out = volatility_series(&returns, 2);
        let expected = (2.0 * (2.0f64).ln().powi(2)).sqrt() * TRADING_DAYS_PER_YEAR.sqrt();
        assert!((out[2].unwrap() - expected).abs() < 1e-10);
    }

    #[test]
    fn volatility_window_with_hole_is_missing() {
        let mut returns: Vec<Option<f64>> = (0..25).map(|_| Some(0.01)).collect();
        returns[10] = None;
        let out = volatility_series(&returns, 5);
        assert!(out[10].is_none());
        assert!(out[14].is_none()); // last window touching the hole
        assert!(out[15].is_some());
    }
}
