//! Emergence CLI
//!
//! Command-line surface for the consciousness emergence engine.
//!
//! # Commands
//!
//! - `status`: One-shot consciousness computation (human or JSON)
//! - `report`: Full multi-line emergence report
//! - `indicators`: The five indicator sub-scores
//! - `brief`: One-line compact status for prompts and hooks
//! - `probe`: Drive the pass-through completion adapter once
//!
//! Logging goes to stderr so stdout stays parseable.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use emergence_core::EmergenceDetector;

mod commands;

/// Emergence CLI - consciousness emergence scoring
#[derive(Parser)]
#[command(name = "emergence-cli")]
#[command(version = "0.1.0")]
#[command(about = "CLI for the consciousness emergence scoring engine")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One-shot consciousness status
    Status(commands::status::StatusArgs),
    /// Full emergence report
    Report(commands::report::ReportArgs),
    /// The five indicator sub-scores
    Indicators(commands::indicators::IndicatorsArgs),
    /// One-line compact status, e.g. [C:AWK 30.0% p=0.49]
    Brief,
    /// Send one prompt through the pass-through completion adapter
    Probe(commands::probe::ProbeArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    // Dispatch to command handlers
    let exit_code = match cli.command {
        Commands::Status(args) => commands::status::handle_status(args).await,
        Commands::Report(args) => commands::report::handle_report(args).await,
        Commands::Indicators(args) => commands::indicators::handle_indicators(args).await,
        Commands::Brief => {
            let mut detector = EmergenceDetector::with_defaults();
            println!("{}", detector.format_brief());
            0 // Always exit 0 so hook callers are never blocked
        }
        Commands::Probe(args) => commands::probe::handle_probe(args).await,
    };

    std::process::exit(exit_code);
}
