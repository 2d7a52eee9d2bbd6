//! Momentum Oscillator - bounded [0, 100] RSI variant
//!
//! Step 1 - Decompose consecutive price deltas into gains and losses.
//! Step 2 - Average the last `window` gains / losses with a SIMPLE
//!          moving average. This is a deliberate deviation from
//!          Wilder's exponential smoothing and must stay that way:
//!          the rest of the dashboard (thresholds, historical signals)
//!          is calibrated against the simple form.
//! Step 3 - RS  = avg_gain / avg_loss, saturating high when the window
//!          saw gains but no losses; a fully flat window reads 50.
//!          R   = 100 - 100 / (1 + RS)
//!
//! Warm-up indices (i < window, including index 0 which has no prior
//! delta) are `Reading::Insufficient`, flattened to 50 (neutral) at the
//! chart boundary.

use crate::domain::{PricePoint, Reading};

/// Numeric sentinel the chart layer receives for warm-up slots.
pub const NEUTRAL: f64 = 50.0;

/// RS value used when the window saw no losses at all.
const RS_SATURATION: f64 = 100.0;

/// Compute the oscillator series for a price series.
///
/// The output has exactly the input's length; every measured value lies
/// in [0, 100]. A `window` of 0 yields an all-warm-up result.
pub fn momentum_oscillator(prices: &[PricePoint], window: usize) -> Vec<Reading> {
    let n = prices.len();
    let mut out = Vec::with_capacity(n);
    if n == 0 {
        return out;
    }

    // gains[i] / losses[i] describe the move from i-1 to i; index 0 has
    // no prior delta and stays at zero.
    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];
    for i in 1..n {
        let delta = prices[i].value - prices[i - 1].value;
        gains[i] = delta.max(0.0);
        losses[i] = (-delta).max(0.0);
    }

    for i in 0..n {
        if window == 0 || i < window {
            out.push(Reading::Insufficient);
            continue;
        }

        let lo = i + 1 - window;
        let avg_gain = gains[lo..=i].iter().sum::<f64>() / window as f64;
        let avg_loss = losses[lo..=i].iter().sum::<f64>() / window as f64;

        let value = if avg_loss > 0.0 {
            let rs = avg_gain / avg_loss;
            100.0 - 100.0 / (1.0 + rs)
        } else if avg_gain > 0.0 {
            // No losses observed: RS saturates high.
            100.0 - 100.0 / (1.0 + RS_SATURATION)
        } else {
            // No movement either way in the whole window.
            NEUTRAL
        };
        out.push(Reading::Value(value));
    }

    out
}
