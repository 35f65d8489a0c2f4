//! Command-line interface for the SmartLoad engine.
//!
//! `smartload optimize` reads a JSON request from disk, validates it, picks
//! the most profitable feasible set of orders for the truck and prints the
//! resulting plan as JSON. `smartload info` prints the limits the tool
//! enforces.
#![forbid(unsafe_code)]

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::EnvFilter;

mod error;
mod fs;
mod info;
mod optimize;
mod wire;

pub use error::CliError;

use info::run_info;
use optimize::{OptimizeArgs, run_optimize};

pub(crate) const ARG_OPTIMIZE_REQUEST: &str = "request";
pub(crate) const ENV_OPTIMIZE_REQUEST: &str = "SMARTLOAD_CMDS_OPTIMIZE_REQUEST_PATH";
pub(crate) const ARG_EXACT_THRESHOLD: &str = "exact-threshold";
pub(crate) const ARG_BITMASK_CAP: &str = "bitmask-cap";
pub(crate) const ARG_TIME_LIMIT_MS: &str = "time-limit-ms";
pub(crate) const ARG_MAX_REQUEST_BYTES: &str = "max-request-bytes";

/// Largest request file accepted unless overridden.
pub const DEFAULT_MAX_REQUEST_BYTES: u64 = 1024 * 1024;

/// Run the SmartLoad CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, request
/// loading, optimization or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose);
    match cli.command {
        Command::Optimize(args) => run_optimize(args),
        Command::Info => run_info(),
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

/// Install a stderr subscriber unless one is already present.
///
/// `RUST_LOG` wins over the `-v` count when it is set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        log::debug!("logging subscriber already installed");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "smartload",
    about = "Choose the most profitable load for a truck",
    version
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Optimize a truck load described by a JSON request file.
    Optimize(OptimizeArgs),
    /// Print the limits and algorithms this build uses.
    Info,
}

#[cfg(test)]
mod tests;
