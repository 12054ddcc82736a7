// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the rolling computations used by
// the indicator engine.  Every function returns a series that is index-aligned
// with its input: element `i` of the output belongs to bar `i`, and `None`
// marks a value that does not exist yet (warm-up) or cannot be computed
// (degenerate window).  Missing is always `None`, never NaN — NaN must not
// leak into downstream arithmetic or serialized output.

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod volatility;
