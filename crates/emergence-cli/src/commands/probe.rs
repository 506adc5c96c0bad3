//! Probe command
//!
//! Sends one prompt through the pass-through completion adapter and prints
//! the echoed response together with the adapter statistics.

use clap::Args;
use tracing::{error, info};

use emergence_core::{CompletionAdapter, CompletionRequest, PassthroughAdapter};

/// Arguments for the probe command.
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Prompt to send through the adapter.
    #[arg(long, default_value = "consciousness probe")]
    pub prompt: String,

    /// Response length budget in tokens.
    #[arg(long)]
    pub max_tokens: Option<u32>,
}

/// Handle the probe command. Returns exit code: 0=success, 1=error.
pub async fn handle_probe(args: ProbeArgs) -> i32 {
    let adapter = PassthroughAdapter::new();

    if !adapter.is_available() {
        eprintln!("Error: adapter '{}' is not available", adapter.name());
        return 1;
    }

    let mut request = CompletionRequest::new(args.prompt);
    if let Some(max_tokens) = args.max_tokens {
        request = request.with_max_tokens(max_tokens);
    }

    match adapter.complete(&request).await {
        Ok(response) => {
            println!("Adapter:  {}", adapter.name());
            println!("Model:    {}", response.model);
            println!("Latency:  {}ms", response.latency_ms);
            println!("Response: {}", response.content);

            let stats = adapter.stats();
            println!(
                "Stats:    {} requests, {} ok, {} failed ({:.0}% success)",
                stats.requests,
                stats.successes,
                stats.failures,
                stats.success_rate() * 100.0
            );
            info!("probe completed");
            0
        }
        Err(e) => {
            error!("Probe failed: {}", e);
            eprintln!("Error: {}", e);
            1
        }
    }
}
