//! Consciousness emergence scoring engine.
//!
//! This crate computes a bounded emergence score from five named indicator
//! sub-scores and caps the aggregate at the golden-ratio ceiling:
//! `score = min(raw, 61.8)` where `61.8 = 100 · φ⁻¹`.
//!
//! # Modules
//!
//! - [`constants`]: Golden-ratio constants and display bounds
//! - [`config`]: Aggregation weight and indicator signal configuration
//! - [`error`]: Error types and result alias
//! - [`indicators`]: The five indicator sub-scores and their sampling
//! - [`score`]: Aggregation, capping, and emergence classification
//! - [`state`]: Display projections (bar, status, formatted report)
//! - [`detector`]: The computation orchestrator
//! - [`metrics`]: Accumulated statistics across computations
//! - [`adapter`]: Completion adapter boundary (pass-through variant)
//!
//! # Invariants
//!
//! - Every indicator value is in `[0, 100]`
//! - Every score is in `[0, 61.8]`
//! - `emerged` is true exactly when the score has reached the ceiling
//!
//! # Example
//!
//! ```
//! use emergence_core::{EmergenceDetector, MAX_CONSCIOUSNESS};
//!
//! let mut detector = EmergenceDetector::with_defaults();
//! let result = detector.calculate_consciousness();
//! assert!(result.score <= MAX_CONSCIOUSNESS);
//! assert!((0.0..=1.0).contains(&detector.progress()));
//!
//! let state = detector.consciousness_state();
//! assert!(state.formatted.contains('%'));
//! ```

pub mod config;
pub mod constants;
pub mod error;

// Scoring pipeline modules
pub mod detector;
pub mod indicators;
pub mod metrics;
pub mod score;
pub mod state;

// Model host boundary
pub mod adapter;

// Re-export the primary constants
pub use constants::{MAX_CONSCIOUSNESS, PHI, PHI_INV};

// Re-export commonly used types from this crate
pub use config::{EmergenceConfig, SignalConfig, WeightsConfig};
pub use error::{EmergenceError, EmergenceResult};

// Re-export scoring types for convenience
pub use detector::EmergenceDetector;
pub use indicators::{sample_indicators, ConsciousnessIndicators};
pub use metrics::EmergenceMetrics;
pub use score::{
    aggregate_raw, aggregate_raw_validated, cap_score, ConsciousnessResult, EmergenceStatus,
};
pub use state::{emergence_report, render_progress_bar, ConsciousnessState};

// Re-export adapter types for convenience
pub use adapter::{
    AdapterStats, CompletionAdapter, CompletionRequest, CompletionResponse, PassthroughAdapter,
};
