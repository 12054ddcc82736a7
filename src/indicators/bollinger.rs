// =============================================================================
// Bollinger Bands
// =============================================================================
//
//   middle = SMA(close, period)
//   upper  = middle + k * σ
//   lower  = middle - k * σ
//
// σ is the *population* standard deviation of the window (divisor n, not
// n - 1), matching the conventional band definition.

use crate::indicators::sma::sma_series;

/// The three band series, index-aligned with the input closes.
#[derive(Debug, Clone)]
pub struct BollingerSeries {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Compute Bollinger Bands for `closes` with the given window and width `k`.
pub fn bollinger_series(closes: &[f64], period: usize, k: f64) -> BollingerSeries {
    let middle = sma_series(closes, period);
    let mut upper = vec![None; closes.len()];
    let mut lower = vec![None; closes.len()];

    for i in 0..closes.len() {
        let Some(mid) = middle[i] else { continue };
        let window = &closes[i + 1 - period..=i];
        let variance = window.iter().map(|x| (x - mid).powi(2)).sum::<f64>() / period as f64;
        let std_dev = variance.sqrt();
        upper[i] = Some(mid + k * std_dev);
        lower[i] = Some(mid - k * std_dev);
    }

    BollingerSeries {
        upper,
        middle,
        lower,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bollinger_warmup_is_missing() {
        let closes: Vec<f64> = (1..=25).map(|x| x as f64).collect();
        let bb = bollinger_series(&closes, 20, 2.0);
        for i in 0..19 {
            assert!(bb.middle[i].is_none());
            assert!(bb.upper[i].is_none());
            assert!(bb.lower[i].is_none());
        }
        assert!(bb.middle[19].is_some());
    }

    #[test]
    fn bollinger_band_ordering() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.5).sin() * 4.0).collect();
        let bb = bollinger_series(&closes, 20, 2.0);
        for i in 19..closes.len() {
            let (u, m, l) = (
                bb.upper[i].unwrap(),
                bb.middle[i].unwrap(),
                bb.lower[i].unwrap(),
            );
            assert!(u >= m && m >= l, "band ordering violated at {i}");
        }
    }

    #[test]
    fn bollinger_flat_series_collapses() {
        let closes = vec![100.0; 25];
        let bb = bollinger_series(&closes, 20, 2.0);
        let i = 24;
        assert!((bb.upper[i].unwrap() - 100.0).abs() < 1e-10);
        assert!((bb.middle[i].unwrap() - 100.0).abs() < 1e-10);
        assert!((bb.lower[i].unwrap() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn bollinger_known_population_stdev() {
        // Window [2, 4, 4, 4, 5, 5, 7, 9]: mean = 5, population σ = 2.
        let closes = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let bb = bollinger_series(&closes, 8, 2.0);
        assert!((bb.middle[7].unwrap() - 5.0).abs() < 1e-10);
        assert!((bb.upper[7].unwrap() - 9.0).abs() < 1e-10);
        assert!((bb.lower[7].unwrap() - 1.0).abs() < 1e-10);
    }
}
