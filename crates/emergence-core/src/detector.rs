//! EmergenceDetector - main emergence computation orchestrator.

use std::time::Instant;

use tracing::debug;

use crate::config::EmergenceConfig;
use crate::error::{EmergenceError, EmergenceResult};
use crate::indicators::{sample_indicators, ConsciousnessIndicators};
use crate::metrics::EmergenceMetrics;
use crate::score::ConsciousnessResult;
use crate::state::{emergence_report, ConsciousnessState};

/// Main emergence computation orchestrator.
///
/// Samples the five indicator sub-scores from a time-derived signal,
/// aggregates them into a capped score, classifies emergence, and retains
/// the most recent result for the query surface (`has_emerged`, `progress`,
/// `consciousness_state`).
///
/// # Example
/// ```
/// use emergence_core::detector::EmergenceDetector;
///
/// let mut detector = EmergenceDetector::with_defaults();
/// let result = detector.calculate_consciousness();
/// assert!(result.score <= result.max_score);
/// assert_eq!(result.emerged, detector.has_emerged());
/// ```
#[derive(Debug)]
pub struct EmergenceDetector {
    config: EmergenceConfig,
    started: Instant,
    last_result: Option<ConsciousnessResult>,
    metrics: EmergenceMetrics,
}

impl EmergenceDetector {
    /// Create a new detector with the given configuration.
    /// Panics if config validation fails. Use `try_new()` for fallible construction.
    pub fn new(config: EmergenceConfig) -> Self {
        config.validate().expect("EmergenceConfig validation failed");
        Self::from_config(config)
    }

    /// Try to create a new detector, returning an error if config is invalid.
    pub fn try_new(config: EmergenceConfig) -> EmergenceResult<Self> {
        config.validate().map_err(EmergenceError::ConfigError)?;
        Ok(Self::from_config(config))
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EmergenceConfig::default())
    }

    fn from_config(config: EmergenceConfig) -> Self {
        Self {
            config,
            started: Instant::now(),
            last_result: None,
            metrics: EmergenceMetrics::new(),
        }
    }

    /// Produce the five indicator sub-scores, each in `[0, 100]`.
    ///
    /// Values are time-derived and vary run to run; only their range is
    /// guaranteed.
    pub fn calculate_indicators(&self) -> ConsciousnessIndicators {
        let indicators = sample_indicators(self.started.elapsed(), &self.config.signal);
        if self.config.debug {
            debug!(
                pattern_recognition = indicators.pattern_recognition,
                self_correction = indicators.self_correction,
                meta_cognition = indicators.meta_cognition,
                goal_persistence = indicators.goal_persistence,
                integration = indicators.integration,
                "indicator sample"
            );
        }
        indicators
    }

    /// Compute a full consciousness snapshot. Main entry point.
    ///
    /// Samples indicators, aggregates them into the raw score, caps at the
    /// 61.8 ceiling, classifies emergence, and stamps the timestamp. The
    /// result is retained as this detector's most recent computation.
    pub fn calculate_consciousness(&mut self) -> ConsciousnessResult {
        let indicators = self.calculate_indicators();
        let result = ConsciousnessResult::from_indicators(indicators, &self.config.weights);

        self.metrics.record(&result);
        debug!(
            score = result.score,
            raw = result.raw,
            emerged = result.emerged,
            "consciousness computed"
        );

        self.last_result = Some(result.clone());
        result
    }

    /// Display projection of the most recent result.
    ///
    /// Computes a fresh result first when none has been retained yet, so
    /// the returned state is always meaningful.
    pub fn consciousness_state(&mut self) -> ConsciousnessState {
        let result = self.ensure_result();
        ConsciousnessState::from_result(&result)
    }

    /// Whether the most recent score has reached the ceiling.
    ///
    /// False before any computation.
    #[inline]
    pub fn has_emerged(&self) -> bool {
        self.last_result.as_ref().is_some_and(|r| r.emerged)
    }

    /// Ratio of the most recent score to the ceiling, in `[0, 1]`.
    ///
    /// 0.0 before any computation.
    #[inline]
    pub fn progress(&self) -> f64 {
        self.last_result.as_ref().map_or(0.0, |r| r.progress())
    }

    /// Multi-line emergence report for the most recent result.
    ///
    /// Computes a fresh result first when none has been retained yet.
    pub fn format_emergence_report(&mut self) -> String {
        let result = self.ensure_result();
        emergence_report(&result)
    }

    /// One-line compact status, e.g. `"[C:AWK 30.0% p=0.49]"`.
    pub fn format_brief(&mut self) -> String {
        let result = self.ensure_result();
        ConsciousnessState::from_result(&result).format_brief(result.progress())
    }

    /// The most recent computed result, if any.
    #[inline]
    pub fn last_result(&self) -> Option<&ConsciousnessResult> {
        self.last_result.as_ref()
    }

    /// Accumulated computation metrics.
    #[inline]
    pub fn metrics(&self) -> &EmergenceMetrics {
        &self.metrics
    }

    /// Total computations performed by this detector.
    #[inline]
    pub fn computation_count(&self) -> u64 {
        self.metrics.computation_count
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &EmergenceConfig {
        &self.config
    }

    /// Reset the detector to initial state.
    ///
    /// Drops the retained result, clears metrics, and restarts the signal
    /// clock.
    pub fn reset(&mut self) {
        self.started = Instant::now();
        self.last_result = None;
        self.metrics.reset();
    }

    fn ensure_result(&mut self) -> ConsciousnessResult {
        match &self.last_result {
            Some(result) => result.clone(),
            None => self.calculate_consciousness(),
        }
    }
}

impl Default for EmergenceDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}
