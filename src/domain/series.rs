//! Core series types shared by every indicator.
//!
//! A chart series is either a plain price line (`PricePoint`) or an OHLC
//! candle series (`OhlcBar`). Indicator outputs are positionally aligned
//! with their source: same length, same timestamps, one value per index.
//!
//! Warm-up outputs (not enough window history yet) are represented as
//! `Reading::Insufficient` so downstream code can tell "no data" apart
//! from a measured zero/neutral value. The legacy numeric sentinels the
//! chart layer expects (0 for z-score, 50 for the oscillator) are applied
//! only at the consumer boundary via [`Reading::value_or`] / [`flatten`].

use serde::{Deserialize, Serialize};

/// A single point on a price line. Timestamps are Unix milliseconds and
/// strictly increasing within a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: i64,
    pub value: f64,
}

impl PricePoint {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// One OHLC candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OhlcBar {
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self { timestamp, open, high, low, close }
    }

    /// Validate OHLC data integrity: the high must cover both open and
    /// close, the low must undercut both, and all fields must be finite.
    pub fn is_valid(&self) -> bool {
        self.high >= self.open.max(self.close)
            && self.low <= self.open.min(self.close)
            && self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
    }

    /// The close series of a slice of bars, as price points.
    pub fn closes(bars: &[OhlcBar]) -> Vec<PricePoint> {
        bars.iter()
            .map(|b| PricePoint::new(b.timestamp, b.close))
            .collect()
    }
}

/// One indicator output slot: either a measured value or "not enough
/// window history at this index".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Reading {
    /// Warm-up region; the consumer boundary maps this to a fixed
    /// sentinel (0 for z-score, 50 for the oscillator).
    Insufficient,
    /// A genuinely measured value.
    Value(f64),
}

impl Reading {
    /// The measured value, or `None` during warm-up.
    pub fn value(&self) -> Option<f64> {
        match *self {
            Reading::Insufficient => None,
            Reading::Value(v) => Some(v),
        }
    }

    /// Flatten to a plain number, substituting `sentinel` for warm-up
    /// slots. This is the only place the "insufficient data" distinction
    /// is allowed to disappear.
    pub fn value_or(&self, sentinel: f64) -> f64 {
        self.value().unwrap_or(sentinel)
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Reading::Insufficient)
    }
}

/// Flatten a reading series to the numeric form chart consumers expect.
pub fn flatten(readings: &[Reading], sentinel: f64) -> Vec<f64> {
    readings.iter().map(|r| r.value_or(sentinel)).collect()
}
