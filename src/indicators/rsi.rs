// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// Step 1 — Compute price deltas from consecutive closes.
// Step 2 — Seed average gain / average loss with the SMA of the first
//          `period` gains / losses.
// Step 3 — Apply Wilder's smoothing for subsequent deltas:
//            avg_gain = (prev_avg_gain * (period - 1) + gain) / period
//            avg_loss = (prev_avg_loss * (period - 1) + loss) / period
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// The first defined value lands at index `period` (one delta per bar after
// the first). Output is always within [0, 100].
// =============================================================================

/// Compute the index-aligned RSI series for `closes`.
///
/// # Edge cases
/// - `period == 0` or fewer than `period + 1` closes => all `None`
/// - avg_loss == 0 (only gains) => 100.0
/// - no movement at all => 50.0
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() < period + 1 {
        return out;
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    let (sum_gain, sum_loss) = deltas[..period]
        .iter()
        .fold((0.0_f64, 0.0_f64), |(g, l), &d| {
            if d > 0.0 {
                (g + d, l)
            } else {
                (g, l + d.abs())
            }
        });

    let period_f = period as f64;
    let mut avg_gain = sum_gain / period_f;
    let mut avg_loss = sum_loss / period_f;
    out[period] = Some(rsi_from_averages(avg_gain, avg_loss));

    for (i, &delta) in deltas.iter().enumerate().skip(period) {
        let gain = if delta > 0.0 { delta } else { 0.0 };
        let loss = if delta < 0.0 { delta.abs() } else { 0.0 };

        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;

        // Delta index i belongs to bar i + 1.
        out[i + 1] = Some(rsi_from_averages(avg_gain, avg_loss));
    }
    out
}

/// Convert average gain / average loss into an RSI value in [0, 100].
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0 // No movement at all — neutral.
    } else if avg_loss == 0.0 {
        100.0 // All gains, no losses.
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_empty_input() {
        assert!(rsi_series(&[], 14).is_empty());
    }

    #[test]
    fn rsi_period_zero() {
        assert!(rsi_series(&[1.0, 2.0, 3.0], 0).iter().all(Option::is_none));
    }

    #[test]
    fn rsi_warmup_is_missing() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let out = rsi_series(&closes, 14);
        for v in &out[..14] {
            assert!(v.is_none());
        }
        assert!(out[14].is_some());
    }

    #[test]
    fn rsi_all_gains() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let out = rsi_series(&closes, 14);
        for v in out.iter().flatten() {
            assert!((v - 100.0).abs() < 1e-10, "expected 100.0, got {v}");
        }
    }

    #[test]
    fn rsi_all_losses() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let out = rsi_series(&closes, 14);
        for v in out.iter().flatten() {
            assert!(v.abs() < 1e-10, "expected 0.0, got {v}");
        }
    }

    #[test]
    fn rsi_flat_market_is_neutral() {
        let closes = vec![100.0; 30];
        let out = rsi_series(&closes, 14);
        for v in out.iter().flatten() {
            assert!((v - 50.0).abs() < 1e-10, "expected 50.0, got {v}");
        }
    }

    #[test]
    fn rsi_always_in_range() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
            44.18, 44.22, 44.57, 43.42, 42.66, 43.13, 44.01, 43.50,
        ];
        let out = rsi_series(&closes, 14);
        for v in out.iter().flatten() {
            assert!((0.0..=100.0).contains(v), "RSI {v} out of range");
        }
    }

    #[test]
    fn rsi_wilder_smoothing_known_case() {
        // period = 2 on [1, 2, 3, 2]:
        //   seed: avg_gain = 1.0, avg_loss = 0.0 => RSI[2] = 100
        //   delta -1: avg_gain = 0.5, avg_loss = 0.5 => RSI[3] = 50
        let out = rsi_series(&[1.0, 2.0, 3.0, 2.0], 2);
        assert!((out[2].unwrap() - 100.0).abs() < 1e-10);
        assert!((out[3].unwrap() - 50.0).abs() < 1e-10);
    }
}
