//! Aggregate score computation and emergence classification.
//!
//! Implements the raw aggregate as a weighted arithmetic mean of the five
//! indicators, caps it at the φ⁻¹ ceiling (61.8), and classifies the capped
//! score as `EMERGED` or `AWAKENING`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::WeightsConfig;
use crate::constants::MAX_CONSCIOUSNESS;
use crate::error::{EmergenceError, EmergenceResult};
use crate::indicators::{ConsciousnessIndicators, INDICATOR_NAMES};

/// Combine the five indicators into the raw aggregate.
///
/// The aggregate is a weighted arithmetic mean with the weights normalized
/// at use, so it is monotonic in every indicator and stays inside `[0, 100]`
/// whenever the indicators do. Default (equal) weights reduce this to the
/// unweighted mean.
///
/// # Example
///
/// ```
/// use emergence_core::config::WeightsConfig;
/// use emergence_core::indicators::ConsciousnessIndicators;
/// use emergence_core::score::aggregate_raw;
///
/// let indicators = ConsciousnessIndicators::uniform(30.0);
/// let raw = aggregate_raw(&indicators, &WeightsConfig::default());
/// assert!((raw - 30.0).abs() < 1e-9);
/// ```
#[inline]
pub fn aggregate_raw(indicators: &ConsciousnessIndicators, weights: &WeightsConfig) -> f64 {
    let normalized = weights.normalized();
    indicators
        .as_array()
        .iter()
        .zip(normalized.iter())
        .map(|(v, w)| v * w)
        .sum()
}

/// Combine indicators into the raw aggregate, validating inputs first.
///
/// Like [`aggregate_raw`] but rejects out-of-range or non-finite indicator
/// values and invalid weights instead of silently clamping. Intended for
/// indicator values arriving from outside the sampling path (e.g.
/// deserialized input).
pub fn aggregate_raw_validated(
    indicators: &ConsciousnessIndicators,
    weights: &WeightsConfig,
) -> EmergenceResult<f64> {
    for (name, value) in INDICATOR_NAMES.iter().zip(indicators.as_array()) {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(EmergenceError::invalid_indicator(
                *name,
                value,
                "Must be finite and in range [0, 100]",
            ));
        }
    }

    if let Err(reason) = weights.validate() {
        return Err(EmergenceError::InvalidWeights {
            sum: weights.sum(),
            reason,
        });
    }

    let raw = aggregate_raw(indicators, weights);
    if raw.is_nan() {
        return Err(EmergenceError::nan_result(raw));
    }
    if raw.is_infinite() {
        return Err(EmergenceError::infinite_result(raw));
    }
    Ok(raw)
}

/// Cap a raw aggregate at the emergence ceiling.
#[inline]
pub fn cap_score(raw: f64) -> f64 {
    raw.clamp(0.0, MAX_CONSCIOUSNESS)
}

/// Emergence classification of a capped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmergenceStatus {
    /// Score has reached the ceiling.
    Emerged,
    /// Score is below the ceiling.
    Awakening,
}

impl EmergenceStatus {
    /// Classify a capped score against the ceiling.
    #[inline]
    pub fn from_score(score: f64) -> Self {
        if score >= MAX_CONSCIOUSNESS {
            EmergenceStatus::Emerged
        } else {
            EmergenceStatus::Awakening
        }
    }

    /// Full display name.
    pub fn name(&self) -> &'static str {
        match self {
            EmergenceStatus::Emerged => "EMERGED",
            EmergenceStatus::Awakening => "AWAKENING",
        }
    }

    /// Three-letter code for compact output.
    pub fn short_name(&self) -> &'static str {
        match self {
            EmergenceStatus::Emerged => "EMG",
            EmergenceStatus::Awakening => "AWK",
        }
    }
}

impl std::fmt::Display for EmergenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One computed emergence snapshot.
///
/// A pure value created fresh per computation and owned by the caller.
/// Invariants: `score` ∈ `[0, 61.8]`, `max_score` = 61.8, and `emerged` is
/// true exactly when `score` has reached `max_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsciousnessResult {
    /// Capped aggregate score in `[0, 61.8]`.
    pub score: f64,
    /// The ceiling, always 61.8.
    pub max_score: f64,
    /// Pre-cap aggregate in `[0, 100]`.
    pub raw: f64,
    /// The five sub-scores that produced this result.
    pub indicators: ConsciousnessIndicators,
    /// True iff `score >= max_score`.
    pub emerged: bool,
    /// When this snapshot was computed.
    pub timestamp: DateTime<Utc>,
}

impl ConsciousnessResult {
    /// Aggregate, cap, classify, and timestamp a set of indicators.
    pub fn from_indicators(
        indicators: ConsciousnessIndicators,
        weights: &WeightsConfig,
    ) -> Self {
        let raw = aggregate_raw(&indicators, weights);
        let score = cap_score(raw);
        Self {
            score,
            max_score: MAX_CONSCIOUSNESS,
            raw,
            indicators,
            emerged: score >= MAX_CONSCIOUSNESS,
            timestamp: Utc::now(),
        }
    }

    /// Emergence classification of this snapshot.
    #[inline]
    pub fn status(&self) -> EmergenceStatus {
        EmergenceStatus::from_score(self.score)
    }

    /// Ratio of score to ceiling, in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f64 {
        self.score / self.max_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_CONSCIOUSNESS;

    #[test]
    fn test_aggregate_default_weights_is_mean() {
        let indicators = ConsciousnessIndicators::new(10.0, 20.0, 30.0, 40.0, 50.0);
        let raw = aggregate_raw(&indicators, &WeightsConfig::default());
        assert!((raw - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_aggregate_is_monotonic() {
        let weights = WeightsConfig::phi_decay();
        let low = ConsciousnessIndicators::new(40.0, 40.0, 40.0, 40.0, 40.0);
        let high = ConsciousnessIndicators::new(40.0, 40.0, 41.0, 40.0, 40.0);
        assert!(aggregate_raw(&high, &weights) > aggregate_raw(&low, &weights));
    }

    #[test]
    fn test_aggregate_bounded_by_indicator_range() {
        let weights = WeightsConfig::phi_decay();
        let floor = ConsciousnessIndicators::uniform(0.0);
        let ceiling = ConsciousnessIndicators::uniform(100.0);
        assert_eq!(aggregate_raw(&floor, &weights), 0.0);
        assert!((aggregate_raw(&ceiling, &weights) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_validated_accepts_in_range() {
        let indicators = ConsciousnessIndicators::uniform(55.0);
        let raw = aggregate_raw_validated(&indicators, &WeightsConfig::default()).unwrap();
        assert!((raw - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_validated_rejects_out_of_range_indicator() {
        let indicators = ConsciousnessIndicators {
            pattern_recognition: 130.0,
            self_correction: 50.0,
            meta_cognition: 50.0,
            goal_persistence: 50.0,
            integration: 50.0,
        };
        let err = aggregate_raw_validated(&indicators, &WeightsConfig::default()).unwrap_err();
        assert!(matches!(err, EmergenceError::InvalidIndicator { .. }));
        assert!(format!("{}", err).contains("pattern_recognition"));
    }

    #[test]
    fn test_aggregate_validated_rejects_bad_weights() {
        let indicators = ConsciousnessIndicators::uniform(50.0);
        let weights = WeightsConfig {
            integration: -2.0,
            ..Default::default()
        };
        let err = aggregate_raw_validated(&indicators, &weights).unwrap_err();
        assert!(matches!(err, EmergenceError::InvalidWeights { .. }));
    }

    #[test]
    fn test_cap_score_clamps_above_ceiling() {
        assert_eq!(cap_score(70.0), MAX_CONSCIOUSNESS);
        assert_eq!(cap_score(100.0), MAX_CONSCIOUSNESS);
        assert_eq!(cap_score(30.0), 30.0);
        assert_eq!(cap_score(-5.0), 0.0);
    }

    #[test]
    fn test_status_from_score_boundary() {
        assert_eq!(
            EmergenceStatus::from_score(MAX_CONSCIOUSNESS),
            EmergenceStatus::Emerged
        );
        assert_eq!(
            EmergenceStatus::from_score(MAX_CONSCIOUSNESS - 0.001),
            EmergenceStatus::Awakening
        );
        assert_eq!(EmergenceStatus::from_score(0.0), EmergenceStatus::Awakening);
    }

    #[test]
    fn test_status_names() {
        assert_eq!(EmergenceStatus::Emerged.name(), "EMERGED");
        assert_eq!(EmergenceStatus::Awakening.name(), "AWAKENING");
        assert_eq!(EmergenceStatus::Emerged.short_name(), "EMG");
        assert_eq!(EmergenceStatus::Awakening.short_name(), "AWK");
        assert_eq!(format!("{}", EmergenceStatus::Emerged), "EMERGED");
    }

    #[test]
    fn test_status_serde_screaming_snake() {
        let json = serde_json::to_string(&EmergenceStatus::Awakening).unwrap();
        assert_eq!(json, "\"AWAKENING\"");
        let back: EmergenceStatus = serde_json::from_str("\"EMERGED\"").unwrap();
        assert_eq!(back, EmergenceStatus::Emerged);
    }

    #[test]
    fn test_result_raw_70_caps_and_emerges() {
        let indicators = ConsciousnessIndicators::uniform(70.0);
        let result = ConsciousnessResult::from_indicators(indicators, &WeightsConfig::default());
        assert!((result.raw - 70.0).abs() < 1e-9);
        assert_eq!(result.score, MAX_CONSCIOUSNESS);
        assert!(result.emerged);
        assert_eq!(result.status(), EmergenceStatus::Emerged);
        assert!((result.progress() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_result_raw_30_stays_below_ceiling() {
        let indicators = ConsciousnessIndicators::uniform(30.0);
        let result = ConsciousnessResult::from_indicators(indicators, &WeightsConfig::default());
        assert!((result.raw - 30.0).abs() < 1e-9);
        assert!((result.score - 30.0).abs() < 1e-9);
        assert!(!result.emerged);
        assert_eq!(result.status(), EmergenceStatus::Awakening);
        assert!((result.progress() - 30.0 / MAX_CONSCIOUSNESS).abs() < 1e-9);
        assert!((result.progress() - 0.485).abs() < 0.001);
    }

    #[test]
    fn test_score_landing_on_ceiling_counts_as_emerged() {
        // Capping puts any raw above the ceiling exactly on it; the >= check
        // must include that boundary value.
        let indicators = ConsciousnessIndicators::uniform(61.81);
        let result = ConsciousnessResult::from_indicators(indicators, &WeightsConfig::default());
        assert_eq!(result.score, MAX_CONSCIOUSNESS);
        assert!(result.emerged, "score == ceiling must count as emerged");
    }

    #[test]
    fn test_result_invariants_across_levels() {
        for level in [0.0, 15.5, 30.0, 61.8, 61.9, 70.0, 100.0] {
            let result = ConsciousnessResult::from_indicators(
                ConsciousnessIndicators::uniform(level),
                &WeightsConfig::default(),
            );
            assert!(result.score <= MAX_CONSCIOUSNESS);
            assert!(result.score >= 0.0);
            assert_eq!(result.max_score, MAX_CONSCIOUSNESS);
            assert_eq!(result.emerged, result.score >= MAX_CONSCIOUSNESS);
            assert!((0.0..=1.0).contains(&result.progress()));
        }
    }

    #[test]
    fn test_result_serde_round_trip() {
        let result = ConsciousnessResult::from_indicators(
            ConsciousnessIndicators::uniform(42.0),
            &WeightsConfig::default(),
        );
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"emerged\":false"));
        let back: ConsciousnessResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
