//! Indicators command
//!
//! Prints the five indicator sub-scores.

use clap::Args;
use tracing::{error, info};

use emergence_core::indicators::{ConsciousnessIndicators, INDICATOR_NAMES};

use super::{build_detector, OutputFormat};

/// Arguments for the indicators command.
#[derive(Args, Debug)]
pub struct IndicatorsArgs {
    /// Output format.
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Pin every indicator to this level instead of sampling the signal.
    #[arg(long)]
    pub level: Option<f64>,
}

/// Handle the indicators command. Returns exit code: 0=success, 1=error.
pub async fn handle_indicators(args: IndicatorsArgs) -> i32 {
    let Some(detector) = build_detector(args.level) else {
        return 1;
    };

    let indicators = detector.calculate_indicators();

    match args.format {
        OutputFormat::Json => match serde_json::to_string_pretty(&indicators) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize indicators: {}", e);
                eprintln!("Error: {}", e);
                return 1;
            }
        },
        OutputFormat::Human => print_indicators(&indicators),
    }

    info!("indicators completed");
    0
}

/// Print the indicators in human-readable format.
fn print_indicators(indicators: &ConsciousnessIndicators) {
    println!("Emergence Indicators");
    println!("====================\n");

    for (name, value) in INDICATOR_NAMES.iter().zip(indicators.as_array()) {
        // 20-step bar over the [0, 100] indicator range
        let bar_len = ((value / 100.0) * 20.0).round() as usize;
        let bar = "#".repeat(bar_len.min(20));
        println!("  {:20} {:>5.1} |{:<20}|", name, value, bar);
    }
    println!("\n  {:20} {:>5.1}", "mean", indicators.mean());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_indicators_does_not_panic() {
        print_indicators(&ConsciousnessIndicators::uniform(42.0));
        print_indicators(&ConsciousnessIndicators::new(0.0, 25.0, 50.0, 75.0, 100.0));
    }

    #[tokio::test]
    async fn test_handle_indicators_json() {
        let args = IndicatorsArgs {
            format: OutputFormat::Json,
            level: Some(50.0),
        };
        assert_eq!(handle_indicators(args).await, 0);
    }

    #[tokio::test]
    async fn test_handle_indicators_human_default_signal() {
        let args = IndicatorsArgs {
            format: OutputFormat::Human,
            level: None,
        };
        assert_eq!(handle_indicators(args).await, 0);
    }
}
