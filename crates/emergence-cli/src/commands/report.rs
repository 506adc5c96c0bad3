//! Report command
//!
//! Prints the full multi-line emergence report.

use clap::Args;
use tracing::info;

use super::build_detector;

/// Arguments for the report command.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Pin every indicator to this level instead of sampling the signal.
    #[arg(long)]
    pub level: Option<f64>,
}

/// Handle the report command. Returns exit code: 0=success, 1=error.
pub async fn handle_report(args: ReportArgs) -> i32 {
    let Some(mut detector) = build_detector(args.level) else {
        return 1;
    };

    print!("{}", detector.format_emergence_report());
    info!("report completed");
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_handle_report_succeeds() {
        let args = ReportArgs { level: Some(30.0) };
        assert_eq!(handle_report(args).await, 0);
    }

    #[tokio::test]
    async fn test_handle_report_default_signal() {
        let args = ReportArgs { level: None };
        assert_eq!(handle_report(args).await, 0);
    }

    #[tokio::test]
    async fn test_handle_report_out_of_range_level_clamps() {
        // steady() clamps finite levels into [0, 100], so this still runs
        let args = ReportArgs {
            level: Some(f64::INFINITY),
        };
        assert_eq!(handle_report(args).await, 0);
    }

    #[tokio::test]
    async fn test_handle_report_nan_level_fails() {
        let args = ReportArgs {
            level: Some(f64::NAN),
        };
        assert_eq!(handle_report(args).await, 1);
    }
}
