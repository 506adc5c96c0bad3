//! CLI command handlers
//!
//! # Modules
//!
//! - `status`: One-shot consciousness computation with JSON/human output
//! - `report`: Full emergence report
//! - `indicators`: Indicator sub-score listing
//! - `probe`: Pass-through completion adapter driver

pub mod indicators;
pub mod probe;
pub mod report;
pub mod status;

use emergence_core::{EmergenceConfig, EmergenceDetector};
use tracing::error;

/// Output format options shared by the commands.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output for interactive use
    Human,
    /// JSON output for scripted callers (to stdout)
    Json,
}

/// Build a detector, pinning indicators to `level` when given.
///
/// Prints the failure and returns `None` on invalid configuration so
/// handlers can map it straight to exit code 1.
pub(crate) fn build_detector(level: Option<f64>) -> Option<EmergenceDetector> {
    let config = match level {
        Some(level) => EmergenceConfig::steady(level),
        None => EmergenceConfig::default(),
    };
    match EmergenceDetector::try_new(config) {
        Ok(detector) => Some(detector),
        Err(e) => {
            error!("Failed to build detector: {}", e);
            eprintln!("Error: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_detector_default() {
        assert!(build_detector(None).is_some());
    }

    #[test]
    fn test_build_detector_steady_level() {
        let mut detector = build_detector(Some(70.0)).expect("valid level");
        assert!(detector.calculate_consciousness().emerged);
    }

    #[test]
    fn test_build_detector_rejects_nan_level() {
        // steady() cannot clamp a NaN level, so validation refuses it
        assert!(build_detector(Some(f64::NAN)).is_none());
    }
}
