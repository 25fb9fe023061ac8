//! StretchGymTimer - a small desktop reminder
//!
//! Keeps a settings window open and plays an alert:
//! - every N hours (1-5) to get up and stretch
//! - once a day at the top of your gym hour

use anyhow::Result;
use clap::Parser;

use stretch_gym_timer::cli::Cli;
use stretch_gym_timer::ui;

/// Main entry point
fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Window or graphics failures are fatal
    if let Err(e) = execute(&cli) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt().with_env_filter(filter).with_target(false).init();
}

/// Runs the reminder with the parsed options.
fn execute(cli: &Cli) -> Result<()> {
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    let config = cli.to_config();
    ui::run(&config)
}

// ============================================================================
// Tests
// ============================================================================
