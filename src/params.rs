//! Engine Parameters
//!
//! Configuration structs for signal detection and synthetic data
//! generation. Window lengths are deliberately NOT config: they are
//! per-call parameters so the chart layer can re-run an indicator with
//! a new window without touching detector or generator state.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Thresholds for composite arrow-signal detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Z-score magnitude that marks an extreme deviation.
    pub z_threshold: f64,
    /// Oscillator level above which the market counts as overbought.
    pub overbought: f64,
    /// Oscillator level below which the market counts as oversold.
    pub oversold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            z_threshold: 2.0,
            overbought: 70.0,
            oversold: 30.0,
        }
    }
}

impl DetectorConfig {
    pub fn with_z_threshold(mut self, threshold: f64) -> Self {
        self.z_threshold = threshold;
        self
    }

    pub fn with_oscillator_bounds(mut self, oversold: f64, overbought: f64) -> Self {
        self.oversold = oversold;
        self.overbought = overbought;
        self
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.z_threshold <= 0.0 || !self.z_threshold.is_finite() {
            return Err(ConfigError::InvalidZThreshold(self.z_threshold));
        }
        if !(0.0..=100.0).contains(&self.oversold)
            || !(0.0..=100.0).contains(&self.overbought)
            || self.oversold >= self.overbought
        {
            return Err(ConfigError::InvalidOscillatorBounds {
                oversold: self.oversold,
                overbought: self.overbought,
            });
        }
        Ok(())
    }
}

/// Parameters for the correlated synthetic OHLC generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Anchor price of asset A (first bar opens here).
    pub price_a: f64,
    /// Anchor price of asset B.
    pub price_b: f64,
    /// Number of bars to generate.
    pub points: usize,
    /// Per-bar volatility; a bar move is a centered shock scaled by this.
    pub volatility: f64,
    /// RNG seed. Identical configs produce identical series.
    pub seed: u64,
    /// Timestamp of the first bar, Unix milliseconds.
    pub start_timestamp: i64,
    /// Spacing between consecutive bars in milliseconds.
    pub step_ms: i64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            price_a: 100.0,
            price_b: 50.0,
            points: 200,
            volatility: 0.02,
            seed: 0,
            start_timestamp: Utc::now().timestamp_millis(),
            step_ms: 60_000, // 1-minute bars
        }
    }
}

impl SyntheticConfig {
    pub fn with_anchors(mut self, price_a: f64, price_b: f64) -> Self {
        self.price_a = price_a;
        self.price_b = price_b;
        self
    }

    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.price_a <= 0.0 || !self.price_a.is_finite() {
            return Err(ConfigError::InvalidAnchorPrice(self.price_a));
        }
        if self.price_b <= 0.0 || !self.price_b.is_finite() {
            return Err(ConfigError::InvalidAnchorPrice(self.price_b));
        }
        if self.points == 0 {
            return Err(ConfigError::InvalidPointCount(self.points));
        }
        if self.volatility <= 0.0 || self.volatility > 1.0 {
            return Err(ConfigError::InvalidVolatility(self.volatility));
        }
        if self.step_ms < 1 {
            return Err(ConfigError::InvalidBarInterval(self.step_ms));
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid z-threshold: {0} (must be finite and > 0)")]
    InvalidZThreshold(f64),
    #[error("Invalid oscillator bounds: oversold {oversold} / overbought {overbought} (need 0 <= oversold < overbought <= 100)")]
    InvalidOscillatorBounds { oversold: f64, overbought: f64 },
    #[error("Invalid anchor price: {0} (must be finite and > 0)")]
    InvalidAnchorPrice(f64),
    #[error("Invalid point count: {0} (must be >= 1)")]
    InvalidPointCount(usize),
    #[error("Invalid volatility: {0} (must be 0 < v <= 1)")]
    InvalidVolatility(f64),
    #[error("Invalid bar interval: {0} ms (must be >= 1)")]
    InvalidBarInterval(i64),
}
