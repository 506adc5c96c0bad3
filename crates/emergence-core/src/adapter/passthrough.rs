//! Pass-through completion adapter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use async_trait::async_trait;
use tracing::warn;

use super::{AdapterStats, CompletionAdapter, CompletionRequest, CompletionResponse};
use crate::error::{EmergenceError, EmergenceResult};

/// Adapter that echoes the prompt back as the completion.
///
/// Always available and never leaves the process; used for wiring checks
/// and as the test double behind the [`CompletionAdapter`] seam. Request
/// statistics are tracked with relaxed atomics so a shared instance can be
/// driven from multiple tasks.
#[derive(Debug, Default)]
pub struct PassthroughAdapter {
    requests: AtomicU64,
    successes: AtomicU64,
    failures: AtomicU64,
}

impl PassthroughAdapter {
    /// Create a new pass-through adapter.
    pub fn new() -> Self {
        Self::default()
    }

    fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }
}

#[async_trait]
impl CompletionAdapter for PassthroughAdapter {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> EmergenceResult<CompletionResponse> {
        let start = Instant::now();
        self.requests.fetch_add(1, Ordering::Relaxed);

        if request.prompt.is_empty() {
            self.record_failure();
            warn!(adapter = self.name(), "rejected empty prompt");
            return Err(EmergenceError::EmptyPrompt);
        }

        // The echo treats max_tokens as a character budget; cutting on a
        // char boundary keeps the output valid UTF-8.
        let content = match request.max_tokens {
            Some(max) => request.prompt.chars().take(max as usize).collect(),
            None => request.prompt.clone(),
        };

        self.successes.fetch_add(1, Ordering::Relaxed);
        Ok(CompletionResponse {
            content,
            model: self.name().to_string(),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "passthrough"
    }

    fn stats(&self) -> AdapterStats {
        AdapterStats {
            requests: self.requests.load(Ordering::Relaxed),
            successes: self.successes.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}
