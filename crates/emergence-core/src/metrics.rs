//! Accumulated statistics across emergence computations.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_CONSCIOUSNESS;
use crate::score::ConsciousnessResult;

/// Aggregate statistics over a detector's computations.
///
/// **DISTINCT FROM [`ConsciousnessResult`]**: a result captures a single
/// computation; this struct tracks running aggregates across many.
///
/// # Example
///
/// ```
/// use emergence_core::metrics::EmergenceMetrics;
///
/// let metrics = EmergenceMetrics::new();
/// assert_eq!(metrics.computation_count, 0);
/// assert!(metrics.is_healthy());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmergenceMetrics {
    /// Total number of computations recorded.
    pub computation_count: u64,

    /// Number of computations whose score reached the ceiling.
    pub emerged_count: u64,

    /// Running average of the capped score, `[0, 61.8]`.
    pub avg_score: f64,

    /// Running average of the pre-cap aggregate, `[0, 100]`.
    pub avg_raw: f64,

    /// Most recently recorded capped score.
    pub last_score: f64,
}

impl EmergenceMetrics {
    /// Create new empty metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all metrics to initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Update running averages with a new computation result.
    ///
    /// Uses exponential moving average with alpha = 0.1 for smooth updates.
    pub fn record(&mut self, result: &ConsciousnessResult) {
        const ALPHA: f64 = 0.1;

        self.computation_count = self.computation_count.saturating_add(1);
        if result.emerged {
            self.emerged_count = self.emerged_count.saturating_add(1);
        }

        if self.computation_count == 1 {
            self.avg_score = result.score;
            self.avg_raw = result.raw;
        } else {
            self.avg_score = ALPHA * result.score + (1.0 - ALPHA) * self.avg_score;
            self.avg_raw = ALPHA * result.raw + (1.0 - ALPHA) * self.avg_raw;
        }
        self.last_score = result.score;
    }

    /// Fraction of computations that emerged, in `[0, 1]`.
    ///
    /// Returns 0.0 before any computation.
    pub fn emergence_rate(&self) -> f64 {
        if self.computation_count == 0 {
            0.0
        } else {
            self.emerged_count as f64 / self.computation_count as f64
        }
    }

    /// Check if metrics indicate healthy operation.
    ///
    /// Healthy when the running averages are valid numbers and the average
    /// score respects the ceiling.
    pub fn is_healthy(&self) -> bool {
        self.avg_score.is_finite()
            && self.avg_raw.is_finite()
            && self.avg_score <= MAX_CONSCIOUSNESS + 1e-9
            && self.avg_score >= 0.0
    }

    /// One-line summary string.
    pub fn summary(&self) -> String {
        format!(
            "Computations: {} | Avg score: {:.1} | Emerged: {}/{} ({:.0}%)",
            self.computation_count,
            self.avg_score,
            self.emerged_count,
            self.computation_count,
            self.emergence_rate() * 100.0
        )
    }
}
