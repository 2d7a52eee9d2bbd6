//! Rolling Statistics - mean, standard deviation, z-score
//!
//! Z-Score Formula: z = (price - rolling_mean) / rolling_std
//!
//! The standard deviation is the population form (divisor = window, not
//! window - 1), matching the rest of the dashboard. Warm-up indices
//! (fewer than `window` points of history) carry `Reading::Insufficient`
//! for the z-score; the mean defaults to the raw price and the std to 0
//! there so the band overlay stays drawable from index 0.
//!
//! Chart inputs are hundreds of points, so the O(n * window) window
//! re-scan is fine.

use crate::domain::{flatten, PricePoint, Reading};

/// Numeric sentinel the chart layer receives for warm-up z-scores.
pub const Z_SENTINEL: f64 = 0.0;

/// Rolling statistics series, positionally aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingStats {
    /// Rolling mean; raw price during warm-up.
    pub mean: Vec<f64>,
    /// Rolling population standard deviation; 0 during warm-up.
    pub std_dev: Vec<f64>,
    /// Z-score; `Insufficient` during warm-up, `Value(0)` when the
    /// window is flat (std = 0 guard).
    pub z_score: Vec<Reading>,
    /// Timestamps copied from the input series.
    pub timestamps: Vec<i64>,
}

impl RollingStats {
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Z-score series in legacy numeric form (warm-up -> 0).
    pub fn z_values(&self) -> Vec<f64> {
        flatten(&self.z_score, Z_SENTINEL)
    }
}

/// Compute rolling mean, population standard deviation and z-score over
/// a price series.
///
/// The output series have exactly the input's length and timestamps.
/// A `window` of 0 yields an all-warm-up result rather than panicking.
pub fn rolling_stats(prices: &[PricePoint], window: usize) -> RollingStats {
    let n = prices.len();
    let mut mean = Vec::with_capacity(n);
    let mut std_dev = Vec::with_capacity(n);
    let mut z_score = Vec::with_capacity(n);
    let timestamps = prices.iter().map(|p| p.timestamp).collect();

    for i in 0..n {
        if window == 0 || i + 1 < window {
            // Not enough history: mean falls back to the raw price,
            // std to 0, and the z-score is explicitly "no data".
            mean.push(prices[i].value);
            std_dev.push(0.0);
            z_score.push(Reading::Insufficient);
            continue;
        }

        let slice = &prices[i + 1 - window..=i];
        let m = slice.iter().map(|p| p.value).sum::<f64>() / window as f64;
        let variance = slice
            .iter()
            .map(|p| {
                let diff = p.value - m;
                diff * diff
            })
            .sum::<f64>()
            / window as f64;
        let s = variance.sqrt();

        // Flat window guard; a measured zero, unlike the warm-up slots.
        let z = if s > 0.0 {
            Reading::Value((prices[i].value - m) / s)
        } else {
            Reading::Value(0.0)
        };

        mean.push(m);
        std_dev.push(s);
        z_score.push(z);
    }

    RollingStats {
        mean,
        std_dev,
        z_score,
        timestamps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn points(values: &[f64]) -> Vec<PricePoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| PricePoint::new(i as i64 * 60_000, v))
            .collect()
    }

    #[test]
    fn test_output_alignment() {
        let prices = points(&[100.0, 101.0, 102.0, 103.0, 104.0]);
        let stats = rolling_stats(&prices, 3);
        assert_eq!(stats.len(), 5);
        assert_eq!(stats.timestamps, vec![0, 60_000, 120_000, 180_000, 240_000]);
    }

    #[test]
    fn test_warmup_region() {
        let prices = points(&[100.0, 102.0, 104.0, 106.0]);
        let stats = rolling_stats(&prices, 3);

        // Indices 0 and 1 have fewer than 3 points of history.
        for i in 0..2 {
            assert_eq!(stats.mean[i], prices[i].value);
            assert_eq!(stats.std_dev[i], 0.0);
            assert!(stats.z_score[i].is_insufficient());
        }
        assert!(!stats.z_score[2].is_insufficient());
    }

    #[test]
    fn test_population_std() {
        // Window [1, 2, 3]: mean 2, population variance 2/3.
        let prices = points(&[1.0, 2.0, 3.0]);
        let stats = rolling_stats(&prices, 3);
        assert_relative_eq!(stats.mean[2], 2.0);
        assert_relative_eq!(stats.std_dev[2], (2.0_f64 / 3.0).sqrt(), epsilon = 1e-12);

        let z = stats.z_score[2].value().unwrap();
        assert_relative_eq!(z, 1.0 / (2.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_flat_window_guard() {
        // Constant prices: std = 0, z must be a measured 0, not NaN.
        let prices = points(&[100.0; 50]);
        let stats = rolling_stats(&prices, 10);
        for i in 9..50 {
            assert_eq!(stats.std_dev[i], 0.0);
            assert_eq!(stats.z_score[i].value(), Some(0.0));
        }
        assert_eq!(stats.z_values(), vec![0.0; 50]);
    }

    #[test]
    fn test_scale_invariance() {
        let raw = [100.0, 103.0, 99.0, 104.0, 101.0, 98.0, 105.0, 102.0];
        let scaled: Vec<f64> = raw.iter().map(|v| v * 7.5).collect();

        let z_raw = rolling_stats(&points(&raw), 5).z_values();
        let z_scaled = rolling_stats(&points(&scaled), 5).z_values();

        for (a, b) in z_raw.iter().zip(&z_scaled) {
            assert_relative_eq!(a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_window_one() {
        // Window 1: every index is its own window, std 0, z measured 0.
        let prices = points(&[5.0, 6.0, 7.0]);
        let stats = rolling_stats(&prices, 1);
        assert_eq!(stats.mean, vec![5.0, 6.0, 7.0]);
        assert_eq!(stats.z_values(), vec![0.0, 0.0, 0.0]);
        assert!(!stats.z_score[0].is_insufficient());
    }

    #[test]
    fn test_window_zero_is_all_warmup() {
        let prices = points(&[1.0, 2.0]);
        let stats = rolling_stats(&prices, 0);
        assert!(stats.z_score.iter().all(|r| r.is_insufficient()));
    }

    #[test]
    fn test_window_longer_than_series() {
        let prices = points(&[1.0, 2.0, 3.0]);
        let stats = rolling_stats(&prices, 10);
        assert_eq!(stats.len(), 3);
        assert!(stats.z_score.iter().all(|r| r.is_insufficient()));
    }

    #[test]
    fn test_empty_input() {
        let stats = rolling_stats(&[], 10);
        assert!(stats.is_empty());
        assert!(stats.z_values().is_empty());
    }
}
