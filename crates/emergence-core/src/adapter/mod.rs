//! Completion adapter boundary.
//!
//! The engine itself never talks to a model host; everything behind that
//! boundary goes through [`CompletionAdapter`]. The crate ships the
//! pass-through variant ([`PassthroughAdapter`]) which echoes prompts and
//! tracks request statistics; real-API variants implement the same trait.

mod passthrough;

pub use self::passthrough::PassthroughAdapter;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::EmergenceResult;

/// A prompt to complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The prompt text.
    pub prompt: String,
    /// Optional response length budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Create a request with no length budget.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: None,
        }
    }

    /// Set the response length budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// A completed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Response text.
    pub content: String,
    /// Name of the model (or variant) that produced it.
    pub model: String,
    /// Wall-clock completion latency in milliseconds.
    pub latency_ms: u64,
}

/// Snapshot of an adapter's request statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterStats {
    /// Total requests received.
    pub requests: u64,
    /// Requests that completed successfully.
    pub successes: u64,
    /// Requests that failed.
    pub failures: u64,
}

impl AdapterStats {
    /// Fraction of requests that succeeded, in `[0, 1]`.
    ///
    /// Returns 1.0 before any request has been made.
    pub fn success_rate(&self) -> f64 {
        if self.requests == 0 {
            1.0
        } else {
            self.successes as f64 / self.requests as f64
        }
    }
}

/// Model completion abstraction.
///
/// Implementations must be shareable across tasks; statistics are tracked
/// internally and exposed as point-in-time [`AdapterStats`] snapshots.
#[async_trait]
pub trait CompletionAdapter: Send + Sync {
    /// Complete a prompt.
    async fn complete(&self, request: &CompletionRequest)
        -> EmergenceResult<CompletionResponse>;

    /// Whether the adapter can currently serve requests.
    fn is_available(&self) -> bool;

    /// Adapter name used in logs and error messages.
    fn name(&self) -> &str;

    /// Snapshot of request statistics.
    fn stats(&self) -> AdapterStats;
}
