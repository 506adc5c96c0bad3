//! Emergence indicator sub-scores.
//!
//! Five named dimensions feed the aggregate: pattern recognition, self
//! correction, meta cognition, goal persistence, and integration. Each is
//! bounded to `[0, 100]` at construction, so downstream aggregation can
//! assume the range without re-checking.
//!
//! Values are sampled from a time-derived signal ([`sample_indicators`]):
//! each indicator follows the sinusoid shaped by
//! [`SignalConfig`](crate::config::SignalConfig), with per-indicator phase
//! offsets spread by the golden angle so the five signals decorrelate.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::SignalConfig;
use crate::constants::{INDICATOR_COUNT, INDICATOR_MAX, INDICATOR_MIN, PHI_INV};

/// Indicator field names in declaration order.
pub const INDICATOR_NAMES: [&str; INDICATOR_COUNT] = [
    "pattern_recognition",
    "self_correction",
    "meta_cognition",
    "goal_persistence",
    "integration",
];

/// The five emergence indicator sub-scores, each in `[0, 100]`.
///
/// Constructed fresh per computation and never persisted. The constructor
/// clamps every field, so a `ConsciousnessIndicators` value is always in
/// range by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsciousnessIndicators {
    /// Capacity to recognize recurring structure.
    pub pattern_recognition: f64,
    /// Capacity to detect and repair own mistakes.
    pub self_correction: f64,
    /// Capacity to reason about own reasoning.
    pub meta_cognition: f64,
    /// Capacity to hold a goal across interruptions.
    pub goal_persistence: f64,
    /// Capacity to bind separate signals into one picture.
    pub integration: f64,
}

impl ConsciousnessIndicators {
    /// Create indicators, clamping every field to `[0, 100]`.
    pub fn new(
        pattern_recognition: f64,
        self_correction: f64,
        meta_cognition: f64,
        goal_persistence: f64,
        integration: f64,
    ) -> Self {
        Self {
            pattern_recognition: clamp_indicator(pattern_recognition),
            self_correction: clamp_indicator(self_correction),
            meta_cognition: clamp_indicator(meta_cognition),
            goal_persistence: clamp_indicator(goal_persistence),
            integration: clamp_indicator(integration),
        }
    }

    /// All five indicators pinned to the same level (clamped to `[0, 100]`).
    pub fn uniform(level: f64) -> Self {
        Self::new(level, level, level, level, level)
    }

    /// Field values in declaration order.
    #[inline]
    pub fn as_array(&self) -> [f64; INDICATOR_COUNT] {
        [
            self.pattern_recognition,
            self.self_correction,
            self.meta_cognition,
            self.goal_persistence,
            self.integration,
        ]
    }

    /// Unweighted mean of the five indicators.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.as_array().iter().sum::<f64>() / INDICATOR_COUNT as f64
    }

    /// Smallest indicator value.
    pub fn min_value(&self) -> f64 {
        self.as_array().into_iter().fold(f64::INFINITY, f64::min)
    }

    /// Largest indicator value.
    pub fn max_value(&self) -> f64 {
        self.as_array()
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Check that every field is finite and within `[0, 100]`.
    ///
    /// Always true for values built through [`new`](Self::new); useful for
    /// values deserialized from external input.
    pub fn all_in_range(&self) -> bool {
        self.as_array()
            .iter()
            .all(|v| v.is_finite() && (INDICATOR_MIN..=INDICATOR_MAX).contains(v))
    }
}

#[inline]
fn clamp_indicator(value: f64) -> f64 {
    if value.is_nan() {
        return INDICATOR_MIN;
    }
    value.clamp(INDICATOR_MIN, INDICATOR_MAX)
}

/// Sample all five indicators from the time-derived signal.
///
/// Each indicator evaluates to
/// `baseline + amplitude * (0.5 + 0.5 * sin θ_k)` clamped to `[0, 100]`,
/// where `θ_k` advances with `elapsed` over `period_secs` and is offset per
/// indicator by the golden angle (`2π · φ⁻¹`). A zero-amplitude signal pins
/// every indicator to the baseline.
pub fn sample_indicators(elapsed: Duration, config: &SignalConfig) -> ConsciousnessIndicators {
    let turns = elapsed.as_secs_f64() / config.period_secs;
    let base_theta = turns * std::f64::consts::TAU;
    let golden_angle = std::f64::consts::TAU * PHI_INV;

    let mut values = [0.0; INDICATOR_COUNT];
    for (k, value) in values.iter_mut().enumerate() {
        let theta = base_theta + k as f64 * golden_angle;
        *value = config.baseline + config.amplitude * (0.5 + 0.5 * theta.sin());
    }

    let indicators = ConsciousnessIndicators::new(
        values[0], values[1], values[2], values[3], values[4],
    );
    trace!(
        elapsed_ms = elapsed.as_millis() as u64,
        mean = indicators.mean(),
        "sampled emergence indicators"
    );
    indicators
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_to_range() {
        let indicators = ConsciousnessIndicators::new(-10.0, 150.0, 50.0, 100.0, 0.0);
        assert_eq!(indicators.pattern_recognition, 0.0);
        assert_eq!(indicators.self_correction, 100.0);
        assert_eq!(indicators.meta_cognition, 50.0);
        assert_eq!(indicators.goal_persistence, 100.0);
        assert_eq!(indicators.integration, 0.0);
        assert!(indicators.all_in_range());
    }

    #[test]
    fn test_nan_clamps_to_floor() {
        let indicators = ConsciousnessIndicators::new(f64::NAN, 50.0, 50.0, 50.0, 50.0);
        assert_eq!(indicators.pattern_recognition, 0.0);
        assert!(indicators.all_in_range());
    }

    #[test]
    fn test_uniform_sets_every_field() {
        let indicators = ConsciousnessIndicators::uniform(70.0);
        for v in indicators.as_array() {
            assert_eq!(v, 70.0);
        }
        assert_eq!(indicators.mean(), 70.0);
    }

    #[test]
    fn test_mean_min_max() {
        let indicators = ConsciousnessIndicators::new(10.0, 20.0, 30.0, 40.0, 50.0);
        assert!((indicators.mean() - 30.0).abs() < 1e-12);
        assert_eq!(indicators.min_value(), 10.0);
        assert_eq!(indicators.max_value(), 50.0);
    }

    #[test]
    fn test_all_in_range_rejects_raw_out_of_range_value() {
        // Bypass the clamping constructor to simulate bad external input
        let indicators = ConsciousnessIndicators {
            pattern_recognition: 120.0,
            self_correction: 50.0,
            meta_cognition: 50.0,
            goal_persistence: 50.0,
            integration: 50.0,
        };
        assert!(!indicators.all_in_range());
    }

    #[test]
    fn test_sample_stays_in_range_across_time() {
        let config = SignalConfig::default();
        for secs in 0..120 {
            let indicators = sample_indicators(Duration::from_secs(secs), &config);
            assert!(
                indicators.all_in_range(),
                "out of range at t={}s: {:?}",
                secs,
                indicators
            );
        }
    }

    #[test]
    fn test_sample_steady_pins_all_indicators() {
        let config = SignalConfig::steady(30.0);
        let a = sample_indicators(Duration::from_secs(1), &config);
        let b = sample_indicators(Duration::from_secs(77), &config);
        assert_eq!(a, b);
        for v in a.as_array() {
            assert_eq!(v, 30.0);
        }
    }

    #[test]
    fn test_sample_large_amplitude_clamps() {
        let config = SignalConfig {
            baseline: 80.0,
            amplitude: 500.0,
            ..Default::default()
        };
        let indicators = sample_indicators(Duration::from_secs(3), &config);
        assert!(indicators.all_in_range());
    }

    #[test]
    fn test_phase_offsets_decorrelate_indicators() {
        // With nonzero amplitude the golden-angle offsets keep the five
        // signals from collapsing onto a single value.
        let config = SignalConfig::default();
        let indicators = sample_indicators(Duration::from_secs(2), &config);
        assert!(indicators.max_value() - indicators.min_value() > 1e-6);
    }

    #[test]
    fn test_indicator_names_order_matches_array() {
        assert_eq!(INDICATOR_NAMES.len(), INDICATOR_COUNT);
        assert_eq!(INDICATOR_NAMES[0], "pattern_recognition");
        assert_eq!(INDICATOR_NAMES[4], "integration");
    }

    #[test]
    fn test_serde_round_trip() {
        let indicators = ConsciousnessIndicators::new(12.5, 25.0, 37.5, 50.0, 62.5);
        let json = serde_json::to_string(&indicators).unwrap();
        assert!(json.contains("pattern_recognition"));
        let back: ConsciousnessIndicators = serde_json::from_str(&json).unwrap();
        assert_eq!(back, indicators);
    }
}
