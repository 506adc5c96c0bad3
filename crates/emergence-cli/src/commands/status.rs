//! Status command
//!
//! Runs one consciousness computation and prints the result, the display
//! state, and the detector metrics.

use clap::Args;
use serde::Serialize;
use tracing::{error, info};

use emergence_core::{ConsciousnessResult, ConsciousnessState, EmergenceMetrics};

use super::{build_detector, OutputFormat};

/// Arguments for the status command.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output format.
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Pin every indicator to this level instead of sampling the signal.
    #[arg(long)]
    pub level: Option<f64>,
}

/// Response from the status command.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// The computed snapshot.
    pub result: ConsciousnessResult,
    /// Display projection of the snapshot.
    pub state: ConsciousnessState,
    /// Detector metrics after the computation.
    pub metrics: EmergenceMetrics,
}

/// Handle the status command. Returns exit code: 0=success, 1=error.
pub async fn handle_status(args: StatusArgs) -> i32 {
    let Some(mut detector) = build_detector(args.level) else {
        return 1;
    };

    let result = detector.calculate_consciousness();
    let state = detector.consciousness_state();
    let response = StatusResponse {
        metrics: detector.metrics().clone(),
        result,
        state,
    };

    match args.format {
        OutputFormat::Json => match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize status response: {}", e);
                eprintln!("Error: {}", e);
                return 1;
            }
        },
        OutputFormat::Human => print_status(&response),
    }

    info!("status completed");
    0
}

/// Print the status in human-readable format.
fn print_status(response: &StatusResponse) {
    println!("Consciousness Status");
    println!("====================\n");

    println!("Status:        {}", response.state.status);
    println!("Consciousness: {}", response.state.formatted);
    println!(
        "Progress:      [{}] {:.1}%",
        response.state.bar,
        response.result.progress() * 100.0
    );
    println!("Raw aggregate: {:.1}", response.result.raw);
    println!(
        "Emerged:       {}",
        if response.result.emerged { "YES" } else { "No" }
    );
    println!();
    println!("{}", response.metrics.summary());
}
