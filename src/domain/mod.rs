//! Domain Layer - core data types for the indicator engine
//!
//! Pure types with no dependency on the computation modules. Everything
//! here is plain data: price points, OHLC bars, tagged indicator
//! readings, and arrow signals. All of it is ephemeral - created fresh
//! on each computation call and discarded after the chart or detector
//! reads it.

pub mod series;
pub mod signal;

pub use series::{flatten, OhlcBar, PricePoint, Reading};
pub use signal::{ArrowSignal, Direction};
