//! Arrow signals - discrete directional events drawn on the chart.
//!
//! A signal is emitted when the z-score and oscillator jointly cross
//! their thresholds at one index. Signals are derived and ephemeral:
//! they are recomputed from scratch whenever inputs change and are
//! never persisted by this crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade direction of an arrow signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Price stretched below the mean - expect reversion up.
    Long,
    /// Price stretched above the mean - expect reversion down.
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => write!(f, "Long"),
            Direction::Short => write!(f, "Short"),
        }
    }
}

/// A directional event anchored to one bar of the source series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowSignal {
    /// Timestamp of the bar that triggered the signal.
    pub timestamp: i64,
    /// Anchor price for drawing: bar high for shorts, bar low for longs
    /// (raw value for scalar series).
    pub price: f64,
    pub direction: Direction,
    /// The z-score that tripped the threshold.
    pub z_score: f64,
    /// How extreme the deviation is, as Phi(|z|) in [0.5, 1).
    pub confidence: f64,
}

impl ArrowSignal {
    pub fn new(timestamp: i64, price: f64, direction: Direction, z_score: f64) -> Self {
        Self {
            timestamp,
            price,
            direction,
            z_score,
            confidence: Self::calculate_confidence(z_score),
        }
    }

    /// Standard normal CDF of the absolute z-score.
    /// Phi(z) = 0.5 * (1 + erf(z / sqrt(2)))
    pub fn calculate_confidence(z_score: f64) -> f64 {
        use statrs::function::erf::erf;
        0.5 * (1.0 + erf(z_score.abs() / f64::sqrt(2.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_signal_creation() {
        let signal = ArrowSignal::new(1_000, 105.5, Direction::Short, 2.3);
        assert_eq!(signal.timestamp, 1_000);
        assert_eq!(signal.price, 105.5);
        assert_eq!(signal.direction, Direction::Short);
        assert_eq!(signal.z_score, 2.3);
    }

    #[test]
    fn test_confidence_mapping() {
        // Known z-score to confidence values of the standard normal CDF.
        assert_relative_eq!(ArrowSignal::calculate_confidence(0.0), 0.5, epsilon = 0.001);
        assert_relative_eq!(ArrowSignal::calculate_confidence(2.0), 0.977, epsilon = 0.001);
        assert_relative_eq!(ArrowSignal::calculate_confidence(3.0), 0.998, epsilon = 0.001);
    }

    #[test]
    fn test_confidence_symmetric_in_sign() {
        // A long trigger at z = -2.5 is as extreme as a short at +2.5.
        assert_relative_eq!(
            ArrowSignal::calculate_confidence(-2.5),
            ArrowSignal::calculate_confidence(2.5),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Long.to_string(), "Long");
        assert_eq!(Direction::Short.to_string(), "Short");
    }
}
