//! Synthetic Series Generator - correlated two-asset OHLC + ratio
//!
//! Produces a plausible pair of correlated OHLC series and their ratio
//! (pair) series for dashboards with no live feed wired in.
//!
//! Per bar:
//! 1. Each asset opens at the previous bar's close (anchors on bar 0).
//! 2. Asset A closes at open * (1 + shock), shock being a centered
//!    uniform draw scaled by the configured volatility; high and low
//!    are widened outward from the open/close hull by independent
//!    non-negative factors.
//! 3. Asset B's shock = CORRELATION * A's shock + idiosyncratic noise,
//!    then the same bar construction with its own widening draws.
//! 4. The ratio bar divides A by B cornerwise, then RECOMPUTES high
//!    and low as the max/min over all four divided corners. Plain
//!    division of two valid bars does not preserve the OHLC invariant
//!    (B's high sits in the denominator of A's high), so this
//!    correction is mandatory.
//!
//! The RNG is owned per generator instance and seeded from the config,
//! so identical configs reproduce identical series and two generators
//! never share random state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::OhlcBar;
use crate::params::SyntheticConfig;

/// Fixed correlation between the two assets' bar moves.
const CORRELATION: f64 = 0.7;

/// The generated pair and its ratio series, all positionally aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSeries {
    pub asset_a: Vec<OhlcBar>,
    pub asset_b: Vec<OhlcBar>,
    pub ratio: Vec<OhlcBar>,
}

impl SyntheticSeries {
    pub fn len(&self) -> usize {
        self.ratio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratio.is_empty()
    }
}

/// Correlated OHLC generator with an isolated, seeded random source.
#[derive(Debug)]
pub struct SyntheticSeriesGenerator {
    config: SyntheticConfig,
    rng: StdRng,
}

impl SyntheticSeriesGenerator {
    pub fn new(config: SyntheticConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    pub fn config(&self) -> &SyntheticConfig {
        &self.config
    }

    /// Generate the full series described by the config.
    ///
    /// Draw order per bar is fixed (A shock, A widenings, B noise,
    /// B widenings); changing it would silently change every seeded
    /// series, so it is part of the generator's contract.
    pub fn generate(&mut self) -> SyntheticSeries {
        let n = self.config.points;
        let sigma = self.config.volatility;
        let mut asset_a = Vec::with_capacity(n);
        let mut asset_b = Vec::with_capacity(n);
        let mut ratio = Vec::with_capacity(n);

        let mut prev_close_a = self.config.price_a;
        let mut prev_close_b = self.config.price_b;

        for i in 0..n {
            let timestamp = self.config.start_timestamp + i as i64 * self.config.step_ms;

            let shock_a = (self.rng.gen::<f64>() - 0.5) * sigma;
            let bar_a = self.build_bar(timestamp, prev_close_a, shock_a);

            let noise = (self.rng.gen::<f64>() - 0.5) * sigma * (1.0 - CORRELATION);
            let shock_b = CORRELATION * shock_a + noise;
            let bar_b = self.build_bar(timestamp, prev_close_b, shock_b);

            prev_close_a = bar_a.close;
            prev_close_b = bar_b.close;

            ratio.push(ratio_bar(&bar_a, &bar_b));
            asset_a.push(bar_a);
            asset_b.push(bar_b);
        }

        debug!(
            points = n,
            seed = self.config.seed,
            volatility = sigma,
            "generated synthetic pair series"
        );

        SyntheticSeries {
            asset_a,
            asset_b,
            ratio,
        }
    }

    /// One bar: close from the shock, high/low widened outward from the
    /// open/close hull so the OHLC invariant holds by construction.
    fn build_bar(&mut self, timestamp: i64, open: f64, shock: f64) -> OhlcBar {
        let close = open * (1.0 + shock);
        let widen_high = self.rng.gen::<f64>() * self.config.volatility * 0.5;
        let widen_low = self.rng.gen::<f64>() * self.config.volatility * 0.5;
        let high = open.max(close) * (1.0 + widen_high);
        let low = open.min(close) * (1.0 - widen_low);
        OhlcBar::new(timestamp, open, high, low, close)
    }
}

/// Cornerwise quotient of two bars with the high/low corrected to the
/// max/min over all four divided corners.
fn ratio_bar(a: &OhlcBar, b: &OhlcBar) -> OhlcBar {
    let open = a.open / b.open;
    let high = a.high / b.high;
    let low = a.low / b.low;
    let close = a.close / b.close;

    let corners = [open, high, low, close];
    let top = corners.iter().cloned().fold(f64::MIN, f64::max);
    let bottom = corners.iter().cloned().fold(f64::MAX, f64::min);

    OhlcBar::new(a.timestamp, open, top, bottom, close)
}
