//! Indicator Layer - pure transforms over price series
//!
//! Every function here takes a finite slice and returns series
//! positionally aligned with it: same length, same timestamps. Nothing
//! is cached across calls; the chart layer simply recomputes on every
//! parameter change.
//!
//! - `rolling`: rolling mean / population std / z-score
//! - `oscillator`: bounded [0, 100] momentum oscillator
//! - `bands`: +-2 sigma / +-1 sigma / mean envelope series

pub mod bands;
pub mod oscillator;
pub mod rolling;

pub use bands::BandSet;
pub use oscillator::{momentum_oscillator, NEUTRAL};
pub use rolling::{rolling_stats, RollingStats, Z_SENTINEL};
