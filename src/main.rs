//! Shinysim - Entry Point
//!
//! Parses the run arguments, writes the parameter file to the working
//! directory, and streams rows to stdout. Diagnostics go to stderr so stdout
//! carries only the data protocol.

use std::io;
use std::path::Path;

use shinysim::command::{parse_tokens, Cli};
use shinysim::core::config::{wall_clock_seed, PacingConfig};
use shinysim::core::error::Result;
use shinysim::simulation::{run_simulation, BlockingPacer};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        tracing::debug!("Exiting after error: {:?}", err);
        eprintln!("{}", err.report());
        std::process::exit(err.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::from_env()?;
    let config = parse_tokens(&cli.tokens)?.into_config(wall_clock_seed);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_simulation(
        &config,
        PacingConfig::default(),
        Path::new("."),
        &mut BlockingPacer,
        &mut out,
    )
    .map(|_| ())
}
