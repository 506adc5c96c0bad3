//! Emergence configuration types.
//!
//! Two knobs shape the engine: aggregation weights (how the five indicator
//! sub-scores combine into the raw aggregate) and the indicator signal
//! (how the time-derived sub-scores move). The score ceiling itself is a
//! constant, not configuration; see [`crate::constants::MAX_CONSCIOUSNESS`].

mod signal;
mod weights;

pub use self::signal::SignalConfig;
pub use self::weights::WeightsConfig;

use serde::{Deserialize, Serialize};

/// Top-level emergence configuration.
///
/// # Example
///
/// ```
/// use emergence_core::config::EmergenceConfig;
///
/// let config = EmergenceConfig::default();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmergenceConfig {
    /// Aggregation weight settings.
    pub weights: WeightsConfig,

    /// Time-derived indicator signal settings.
    pub signal: SignalConfig,

    /// Enable debug logging for indicator sampling.
    #[serde(default)]
    pub debug: bool,
}

impl EmergenceConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with golden-ratio-decayed aggregation weights.
    ///
    /// Pattern recognition dominates and each following indicator counts
    /// φ⁻¹ times as much as the previous one.
    pub fn phi_weighted() -> Self {
        Self {
            weights: WeightsConfig::phi_decay(),
            ..Default::default()
        }
    }

    /// Configuration whose indicators are pinned to a constant level.
    ///
    /// With default (equal) weights the raw aggregate equals `level`,
    /// which makes whole-pipeline behavior reproducible.
    pub fn steady(level: f64) -> Self {
        Self {
            signal: SignalConfig::steady(level),
            ..Default::default()
        }
    }

    /// Validate the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.weights.validate()?;
        self.signal.validate()?;
        Ok(())
    }
}
