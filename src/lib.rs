//! signal-engine - indicator core of a trading-signal dashboard
//!
//! Pure, synchronous transforms over finite in-memory price series:
//! rolling z-score statistics, a bounded momentum oscillator, deviation
//! band envelopes, composite arrow-signal detection, and a correlated
//! synthetic OHLC generator for dashboards without a live feed.
//!
//! # Modules
//!
//! - `domain`: Core data types (PricePoint, OhlcBar, Reading, ArrowSignal)
//! - `params`: Validated configuration (DetectorConfig, SyntheticConfig)
//! - `indicators`: Rolling statistics, oscillator, deviation bands
//! - `detector`: Composite threshold gating into arrow signals
//! - `synthetic`: Seeded correlated two-asset OHLC + ratio generator
//!
//! The crate performs no I/O and persists nothing; every output is
//! recomputed from scratch when the caller's inputs (prices, window
//! lengths, thresholds) change. Warm-up outputs are tagged
//! [`domain::Reading::Insufficient`] rather than silently reusing the
//! numeric sentinels, so consumers can tell "not enough history" apart
//! from a measured neutral reading.

pub mod detector;
pub mod domain;
pub mod indicators;
pub mod params;
pub mod synthetic;

pub use detector::{detect_signals, SignalAnchor};
pub use domain::{ArrowSignal, Direction, OhlcBar, PricePoint, Reading};
pub use indicators::{momentum_oscillator, rolling_stats, BandSet, RollingStats};
pub use params::{ConfigError, DetectorConfig, SyntheticConfig};
pub use synthetic::{SyntheticSeries, SyntheticSeriesGenerator};
