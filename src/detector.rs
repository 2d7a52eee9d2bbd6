//! Signal Detector - composite threshold gating
//!
//! Combines the z-score and oscillator series under configurable
//! thresholds into discrete arrow signals:
//!
//! - short: z >  z_threshold AND oscillator > overbought
//! - long:  z < -z_threshold AND oscillator < oversold
//!
//! Indices are evaluated independently; adjacent indices may both
//! fire. Debounce or cooldown, if wanted, is a caller concern. The
//! short predicate is checked first; under the default (opposite-sign)
//! thresholds the two predicates are mutually exclusive, so the order
//! only matters for unconventional configurations.

use tracing::debug;

use crate::domain::{ArrowSignal, Direction, OhlcBar, PricePoint, Reading};
use crate::params::DetectorConfig;

/// Where an arrow attaches to the source series.
///
/// OHLC input anchors shorts at the bar high and longs at the bar low;
/// scalar input anchors both at the raw value.
pub trait SignalAnchor {
    fn timestamp(&self) -> i64;
    fn anchor_price(&self, direction: Direction) -> f64;
}

impl SignalAnchor for OhlcBar {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }

    fn anchor_price(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Short => self.high,
            Direction::Long => self.low,
        }
    }
}

impl SignalAnchor for PricePoint {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }

    fn anchor_price(&self, _direction: Direction) -> f64 {
        self.value
    }
}

/// Scan aligned series for threshold crossings.
///
/// `z_score` and `oscillator` must be positionally aligned with
/// `series`; warm-up readings never fire. Returns signals ordered by
/// index, most indices producing none.
pub fn detect_signals<A: SignalAnchor>(
    series: &[A],
    z_score: &[Reading],
    oscillator: &[Reading],
    config: &DetectorConfig,
) -> Vec<ArrowSignal> {
    debug_assert_eq!(series.len(), z_score.len());
    debug_assert_eq!(series.len(), oscillator.len());

    let n = series.len().min(z_score.len()).min(oscillator.len());
    let mut signals = Vec::new();

    for i in 0..n {
        let (Some(z), Some(osc)) = (z_score[i].value(), oscillator[i].value()) else {
            continue; // warm-up
        };

        let direction = if z > config.z_threshold && osc > config.overbought {
            Direction::Short
        } else if z < -config.z_threshold && osc < config.oversold {
            Direction::Long
        } else {
            continue;
        };

        let bar = &series[i];
        let signal = ArrowSignal::new(bar.timestamp(), bar.anchor_price(direction), direction, z);
        debug!(
            timestamp = signal.timestamp,
            %direction,
            z_score = z,
            oscillator = osc,
            price = signal.price,
            "arrow signal"
        );
        signals.push(signal);
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(i: i64, open: f64, high: f64, low: f64, close: f64) -> OhlcBar {
        OhlcBar::new(i * 1_000, open, high, low, close)
    }

    fn values(vs: &[f64]) -> Vec<Reading> {
        vs.iter().map(|&v| Reading::Value(v)).collect()
    }

    #[test]
    fn test_short_signal_anchors_at_high() {
        let bars = vec![bar(0, 100.0, 108.0, 99.0, 107.0)];
        let signals = detect_signals(
            &bars,
            &values(&[2.4]),
            &values(&[75.0]),
            &DetectorConfig::default(),
        );

        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].direction, Direction::Short);
        assert_eq!(signals[0].price, 108.0);
        assert_eq!(signals[0].timestamp, 0);
        assert_eq!(signals[0].z_score, 2.4);
        assert!(signals[0].confidence > 0.5);
    }

    #[test]
    fn test_long_signal_anchors_at_low() {
        let bars = vec![bar(3, 95.0, 96.0, 91.5, 92.0)];
        let signals = detect_signals(
            &bars,
            &values(&[-2.2]),
            &values(&[25.0]),
            &DetectorConfig::default(),
        );

        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].direction, Direction::Long);
        assert_eq!(signals[0].price, 91.5);
        assert_eq!(signals[0].timestamp, 3_000);
    }

    #[test]
    fn test_scalar_input_anchors_at_value() {
        let prices = vec![PricePoint::new(7_000, 123.0)];
        let signals = detect_signals(
            &prices,
            &values(&[2.5]),
            &values(&[80.0]),
            &DetectorConfig::default(),
        );

        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].price, 123.0);
    }

    #[test]
    fn test_both_conditions_required() {
        let bars = vec![
            bar(0, 100.0, 101.0, 99.0, 100.5), // extreme z, neutral oscillator
            bar(1, 100.0, 101.0, 99.0, 100.5), // neutral z, overbought oscillator
        ];
        let signals = detect_signals(
            &bars,
            &values(&[2.5, 0.3]),
            &values(&[50.0, 85.0]),
            &DetectorConfig::default(),
        );
        assert!(signals.is_empty());
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly at the thresholds must not fire (strict comparisons).
        let bars = vec![bar(0, 100.0, 101.0, 99.0, 100.5)];
        let signals = detect_signals(
            &bars,
            &values(&[2.0]),
            &values(&[70.0]),
            &DetectorConfig::default(),
        );
        assert!(signals.is_empty());
    }

    #[test]
    fn test_warmup_never_fires() {
        let bars = vec![bar(0, 100.0, 110.0, 90.0, 105.0)];
        let signals = detect_signals(
            &bars,
            &[Reading::Insufficient],
            &values(&[95.0]),
            &DetectorConfig::default(),
        );
        assert!(signals.is_empty());
    }

    #[test]
    fn test_adjacent_indices_both_fire() {
        // No cooldown: consecutive extremes each produce a signal.
        let bars = vec![
            bar(0, 100.0, 110.0, 99.0, 109.0),
            bar(1, 109.0, 112.0, 108.0, 111.0),
        ];
        let signals = detect_signals(
            &bars,
            &values(&[2.3, 2.6]),
            &values(&[78.0, 81.0]),
            &DetectorConfig::default(),
        );
        assert_eq!(signals.len(), 2);
        assert!(signals[0].timestamp < signals[1].timestamp);
    }

    #[test]
    fn test_short_wins_tie_break() {
        // A degenerate config can make both predicates true at once;
        // the short branch is evaluated first.
        let config = DetectorConfig {
            z_threshold: -1.0, // z > -1 and z < 1 are both satisfiable
            overbought: 10.0,
            oversold: 90.0,
        };
        let bars = vec![bar(0, 100.0, 105.0, 95.0, 100.0)];
        let signals = detect_signals(&bars, &values(&[0.0]), &values(&[50.0]), &config);

        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].direction, Direction::Short);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = DetectorConfig::default()
            .with_z_threshold(3.0)
            .with_oscillator_bounds(20.0, 80.0);
        let bars = vec![bar(0, 100.0, 106.0, 99.0, 105.0)];

        // Would fire under defaults, but not under the tighter config.
        let signals = detect_signals(&bars, &values(&[2.5]), &values(&[75.0]), &config);
        assert!(signals.is_empty());

        let signals = detect_signals(&bars, &values(&[3.2]), &values(&[85.0]), &config);
        assert_eq!(signals.len(), 1);
    }
}
