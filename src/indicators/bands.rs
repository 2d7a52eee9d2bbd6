//! Deviation Bands - five parallel envelope series
//!
//! upper_2 = mean + 2*std, upper_1 = mean + std, mean_line = mean,
//! lower_1 = mean - std, lower_2 = mean - 2*std.
//!
//! Price-space bands MUST be built from the rolling statistics of the
//! price series itself. Bounding a price chart with z-space parameters
//! (or vice versa) is a unit mismatch; the z-space overlay has its own
//! constructor with the flat 0/1 parameters of a normalized series.

use serde::{Deserialize, Serialize};

use super::rolling::RollingStats;

/// Standard-deviation multiples used by the two outer band pairs.
const BAND_WIDTHS: (f64, f64) = (1.0, 2.0);

/// Five aligned envelope series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandSet {
    pub upper_2: Vec<f64>,
    pub upper_1: Vec<f64>,
    pub mean_line: Vec<f64>,
    pub lower_1: Vec<f64>,
    pub lower_2: Vec<f64>,
}

impl BandSet {
    /// Price-space bands from the rolling mean/std of the price series.
    ///
    /// During warm-up the rolling stats carry (raw price, 0), so all
    /// five lines collapse onto the price there and fan out once the
    /// window fills.
    pub fn from_rolling(stats: &RollingStats) -> Self {
        let (w1, w2) = BAND_WIDTHS;
        let band = |w: f64| -> Vec<f64> {
            stats
                .mean
                .iter()
                .zip(&stats.std_dev)
                .map(|(m, s)| m + w * s)
                .collect()
        };

        Self {
            upper_2: band(w2),
            upper_1: band(w1),
            mean_line: stats.mean.clone(),
            lower_1: band(-w1),
            lower_2: band(-w2),
        }
    }

    /// Flat z-space reference bands (mean 0, std 1) for a normalized
    /// series of length `n`.
    pub fn z_space(n: usize) -> Self {
        let (w1, w2) = BAND_WIDTHS;
        Self {
            upper_2: vec![w2; n],
            upper_1: vec![w1; n],
            mean_line: vec![0.0; n],
            lower_1: vec![-w1; n],
            lower_2: vec![-w2; n],
        }
    }

    pub fn len(&self) -> usize {
        self.mean_line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean_line.is_empty()
    }
}
