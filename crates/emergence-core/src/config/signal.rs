//! Indicator signal settings.
//!
//! Indicator values are time-derived: each indicator follows a slow sinusoid
//! around a shared baseline, with per-indicator phase offsets spread by φ⁻¹
//! multiples so the five signals drift apart instead of moving in lockstep.

use serde::{Deserialize, Serialize};

use crate::constants::{INDICATOR_MAX, INDICATOR_MIN, PHI};

/// Time-derived indicator signal shape.
///
/// Each indicator samples to `baseline + amplitude * (0.5 + 0.5 * sin θ)`,
/// clamped to `[0, 100]`, where θ advances with elapsed time at a rate set
/// by `period_secs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Signal floor all indicators oscillate above.
    /// Range: `[0.0, 100.0]`
    pub baseline: f64,

    /// Peak-to-floor swing added on top of the baseline.
    /// Must be `>= 0`; the sampled value is clamped to `[0, 100]` regardless.
    pub amplitude: f64,

    /// Full oscillation period in seconds.
    /// Must be `> 0`. Default is `8 * φ` (~12.9s).
    pub period_secs: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            baseline: 25.0,
            amplitude: 45.0,
            period_secs: 8.0 * PHI,
        }
    }
}

impl SignalConfig {
    /// A signal pinned to a constant level: zero amplitude, baseline `level`.
    ///
    /// Every indicator samples to exactly `level` (clamped to `[0, 100]`),
    /// which makes aggregate behavior reproducible for scenario runs.
    pub fn steady(level: f64) -> Self {
        Self {
            baseline: level.clamp(INDICATOR_MIN, INDICATOR_MAX),
            amplitude: 0.0,
            ..Default::default()
        }
    }

    /// Validate the signal configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.baseline.is_finite() || !(INDICATOR_MIN..=INDICATOR_MAX).contains(&self.baseline)
        {
            return Err(format!(
                "baseline must be in [{}, {}], got {}",
                INDICATOR_MIN, INDICATOR_MAX, self.baseline
            ));
        }
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(format!("amplitude must be >= 0, got {}", self.amplitude));
        }
        if !self.period_secs.is_finite() || self.period_secs <= 0.0 {
            return Err(format!("period_secs must be > 0, got {}", self.period_secs));
        }
        Ok(())
    }
}
