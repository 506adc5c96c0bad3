//! Aggregation weight settings.
//!
//! The five indicator sub-scores are combined into a raw aggregate by a
//! weighted arithmetic mean. Weights are normalized at use, so only their
//! relative proportions matter.

use serde::{Deserialize, Serialize};

use crate::constants::{INDICATOR_COUNT, PHI_INV};

/// Aggregation weights for the five emergence indicators.
///
/// All weights must be finite and non-negative, and at least one must be
/// positive. The default gives every indicator equal weight, which reduces
/// the aggregate to an unweighted mean.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsConfig {
    /// Weight of the pattern recognition indicator.
    pub pattern_recognition: f64,

    /// Weight of the self correction indicator.
    pub self_correction: f64,

    /// Weight of the meta cognition indicator.
    pub meta_cognition: f64,

    /// Weight of the goal persistence indicator.
    pub goal_persistence: f64,

    /// Weight of the integration indicator.
    pub integration: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            pattern_recognition: 1.0,
            self_correction: 1.0,
            meta_cognition: 1.0,
            goal_persistence: 1.0,
            integration: 1.0,
        }
    }
}

impl WeightsConfig {
    /// Weights decaying by successive powers of φ⁻¹.
    ///
    /// Pattern recognition carries full weight, each following indicator
    /// carries φ⁻¹ times the previous one.
    pub fn phi_decay() -> Self {
        Self {
            pattern_recognition: 1.0,
            self_correction: PHI_INV,
            meta_cognition: PHI_INV * PHI_INV,
            goal_persistence: PHI_INV * PHI_INV * PHI_INV,
            integration: PHI_INV * PHI_INV * PHI_INV * PHI_INV,
        }
    }

    /// Weights in indicator declaration order.
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

    /// Sum of all weights.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Weights scaled so they sum to 1.0.
    ///
    /// Callers must validate first; a zero sum would divide by zero here.
    pub fn normalized(&self) -> [f64; INDICATOR_COUNT] {
        let sum = self.sum();
        let mut out = self.as_array();
        for w in &mut out {
            *w /= sum;
        }
        out
    }

    /// Validate the weight configuration.
    pub fn validate(&self) -> Result<(), String> {
        for (name, w) in [
            ("pattern_recognition", self.pattern_recognition),
            ("self_correction", self.self_correction),
            ("meta_cognition", self.meta_cognition),
            ("goal_persistence", self.goal_persistence),
            ("integration", self.integration),
        ] {
            if !w.is_finite() {
                return Err(format!("weight '{}' must be finite, got {}", name, w));
            }
            if w < 0.0 {
                return Err(format!("weight '{}' must be >= 0, got {}", name, w));
            }
        }
        if self.sum() <= 0.0 {
            return Err(format!("weight sum must be > 0, got {}", self.sum()));
        }
        Ok(())
    }
}
