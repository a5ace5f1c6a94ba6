//! Taskparams: substitute parameters and resources into task specs.
//!
//! This is the main entry point for the `taskparams` CLI. It parses arguments,
//! sets up logging, loads the config, dispatches to the command handler, and
//! handles errors with proper exit codes.

use std::process::ExitCode;
use taskparams::cli::Cli;
use taskparams::config::Config;
use taskparams::{commands, exit_codes};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);
    debug!(verbosity = cli.verbose, "taskparams started");

    let cwd = std::env::current_dir().unwrap_or_default();
    let result = Config::resolve(cli.config.as_deref(), &cwd)
        .and_then(|config| commands::dispatch(cli.command, &config));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            debug!(exit_code = err.exit_code(), "command failed");
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
