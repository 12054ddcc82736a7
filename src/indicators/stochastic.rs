// =============================================================================
// Stochastic Oscillator (KDJ)
// =============================================================================
//
//   raw %K = 100 * (close - LL) / (HH - LL)
//            where HH / LL are the highest high / lowest low over the
//            `fastk` look-back window
//   slow K = SMA(raw %K, slowk)
//   slow D = SMA(slow K, slowd)
//   J      = 3 * K - 2 * D
//
// The J line is a linear extrapolation and may leave [0, 100]; K and D never
// do. A flat window (HH == LL) has no defined %K — the value is missing, it
// must not surface as NaN or infinity.

use crate::indicators::sma::sma_of_optional;

/// The three KDJ output series, index-aligned with the input bars.
#[derive(Debug, Clone)]
pub struct KdjSeries {
    pub k: Vec<Option<f64>>,
    pub d: Vec<Option<f64>>,
    pub j: Vec<Option<f64>>,
}

/// Compute the KDJ oscillator over parallel high/low/close slices.
///
/// The three slices must be the same length (one element per bar).
pub fn kdj_series(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    fastk: usize,
    slowk: usize,
    slowd: usize,
) -> KdjSeries {
    let n = closes.len();
    debug_assert_eq!(highs.len(), n);
    debug_assert_eq!(lows.len(), n);

    let mut raw_k = vec![None; n];
    if fastk > 0 && n >= fastk {
        for i in (fastk - 1)..n {
            let window = i + 1 - fastk..=i;
            let hh = highs[window.clone()]
                .iter()
                .fold(f64::NEG_INFINITY, |a, &b| a.max(b));
            let ll = lows[window].iter().fold(f64::INFINITY, |a, &b| a.min(b));
            let range = hh - ll;
            // Flat window: %K is undefined, not NaN.
            if range > 0.0 {
                raw_k[i] = Some(100.0 * (closes[i] - ll) / range);
            }
        }
    }

    let k = sma_of_optional(&raw_k, slowk);
    let d = sma_of_optional(&k, slowd);

    let j = k
        .iter()
        .zip(d.iter())
        .map(|(k, d)| match (k, d) {
            (Some(k), Some(d)) => Some(3.0 * k - 2.0 * d),
            _ => None,
        })
        .collect();

    KdjSeries { k, d, j }
}
