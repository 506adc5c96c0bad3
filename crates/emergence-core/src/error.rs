//! Emergence error types.
//!
//! The scoring path itself is total and cannot fail; errors arise only from
//! the validated aggregation entry points, configuration construction, and
//! the completion adapter boundary.

use thiserror::Error;

/// Errors that can occur in the emergence engine.
#[derive(Debug, Error)]
pub enum EmergenceError {
    /// Invalid aggregate computation result (NaN or Infinity)
    #[error("Invalid emergence computation: raw={raw}. {reason}")]
    InvalidComputation {
        /// Pre-cap aggregate value
        raw: f64,
        /// Reason for invalidity
        reason: String,
    },

    /// An indicator value outside [0, 100] or non-finite
    #[error("Invalid indicator '{name}': {value}. {reason}")]
    InvalidIndicator {
        /// Indicator field name
        name: String,
        /// Offending value
        value: f64,
        /// Reason for invalidity
        reason: String,
    },

    /// Aggregation weights rejected (negative, non-finite, or zero sum)
    #[error("Invalid aggregation weights: sum={sum}. {reason}")]
    InvalidWeights {
        /// Sum of the five weights
        sum: f64,
        /// Reason for invalidity
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Completion adapter is not available
    #[error("Adapter '{name}' is not available")]
    AdapterUnavailable {
        /// Adapter name
        name: String,
    },

    /// Completion adapter failed to produce a response
    #[error("Adapter '{name}' failed: {reason}")]
    AdapterFailure {
        /// Adapter name
        name: String,
        /// Failure description
        reason: String,
    },

    /// Empty prompt provided to a completion adapter
    #[error("Empty prompt provided for completion")]
    EmptyPrompt,

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for emergence operations.
pub type EmergenceResult<T> = Result<T, EmergenceError>;

impl From<serde_json::Error> for EmergenceError {
    fn from(err: serde_json::Error) -> Self {
        EmergenceError::SerializationError(err.to_string())
    }
}

impl EmergenceError {
    /// Create an InvalidComputation error for NaN aggregates.
    pub fn nan_result(raw: f64) -> Self {
        EmergenceError::InvalidComputation {
            raw,
            reason: "Result is NaN".to_string(),
        }
    }

    /// Create an InvalidComputation error for infinite aggregates.
    pub fn infinite_result(raw: f64) -> Self {
        EmergenceError::InvalidComputation {
            raw,
            reason: "Result is infinite".to_string(),
        }
    }

    /// Create an invalid indicator error.
    pub fn invalid_indicator(
        name: impl Into<String>,
        value: f64,
        reason: impl Into<String>,
    ) -> Self {
        EmergenceError::InvalidIndicator {
            name: name.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Create an InvalidWeights error for a non-positive weight sum.
    pub fn weight_sum_error(sum: f64) -> Self {
        EmergenceError::InvalidWeights {
            sum,
            reason: format!("Weight sum must be > 0, got {}", sum),
        }
    }

    /// Create an InvalidWeights error for a negative weight.
    pub fn negative_weight(sum: f64) -> Self {
        EmergenceError::InvalidWeights {
            sum,
            reason: "Weights cannot be negative".to_string(),
        }
    }

    /// Create an adapter failure error.
    pub fn adapter_failure(name: impl Into<String>, reason: impl Into<String>) -> Self {
        EmergenceError::AdapterFailure {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error is recoverable (retry may succeed).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EmergenceError::AdapterUnavailable { .. }
                | EmergenceError::AdapterFailure { .. }
                | EmergenceError::EmptyPrompt
        )
    }

    /// Check if this error originated at the adapter boundary.
    pub fn is_adapter_error(&self) -> bool {
        matches!(
            self,
            EmergenceError::AdapterUnavailable { .. } | EmergenceError::AdapterFailure { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_computation_display() {
        let err = EmergenceError::InvalidComputation {
            raw: 42.5,
            reason: "test reason".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("raw=42.5"));
        assert!(msg.contains("test reason"));
    }

    #[test]
    fn test_nan_result_helper() {
        let err = EmergenceError::nan_result(f64::NAN);
        assert!(format!("{}", err).contains("NaN"));
    }

    #[test]
    fn test_infinite_result_helper() {
        let err = EmergenceError::infinite_result(f64::INFINITY);
        assert!(format!("{}", err).contains("infinite"));
    }

    #[test]
    fn test_invalid_indicator_helper() {
        let err = EmergenceError::invalid_indicator("meta_cognition", 150.0, "Must be in [0, 100]");
        let msg = format!("{}", err);
        assert!(msg.contains("meta_cognition"));
        assert!(msg.contains("150"));
        assert!(msg.contains("[0, 100]"));
    }

    #[test]
    fn test_weight_sum_error_helper() {
        let err = EmergenceError::weight_sum_error(0.0);
        let msg = format!("{}", err);
        assert!(msg.contains("sum=0"));
        assert!(msg.contains("must be > 0"));
    }

    #[test]
    fn test_negative_weight_helper() {
        let err = EmergenceError::negative_weight(-1.5);
        assert!(format!("{}", err).contains("negative"));
    }

    #[test]
    fn test_adapter_failure_helper() {
        let err = EmergenceError::adapter_failure("passthrough", "connection reset");
        let msg = format!("{}", err);
        assert!(msg.contains("passthrough"));
        assert!(msg.contains("connection reset"));
    }

    #[test]
    fn test_adapter_unavailable_display() {
        let err = EmergenceError::AdapterUnavailable {
            name: "openai".to_string(),
        };
        assert!(format!("{}", err).contains("not available"));
    }

    #[test]
    fn test_is_recoverable() {
        assert!(EmergenceError::EmptyPrompt.is_recoverable());
        assert!(EmergenceError::adapter_failure("p", "timeout").is_recoverable());
        assert!(!EmergenceError::ConfigError("bad".to_string()).is_recoverable());
        assert!(!EmergenceError::nan_result(f64::NAN).is_recoverable());
    }

    #[test]
    fn test_is_adapter_error() {
        assert!(EmergenceError::adapter_failure("p", "x").is_adapter_error());
        assert!(EmergenceError::AdapterUnavailable {
            name: "p".to_string()
        }
        .is_adapter_error());
        assert!(!EmergenceError::EmptyPrompt.is_adapter_error());
        assert!(!EmergenceError::weight_sum_error(0.0).is_adapter_error());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("invalid json").unwrap_err();
        let err: EmergenceError = json_err.into();
        assert!(matches!(err, EmergenceError::SerializationError(_)));
    }
}
