//! Command-line interface for running nestrank rating reports.
//!
//! The `rate` subcommand loads caller-owned candidate data from JSON files,
//! runs the full scoring pipeline against either the live backend or
//! recorded fixture files, and emits a JSON rating report.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod input;
mod rate;
mod report;

pub use error::CliError;

pub(crate) const ARG_RATE_PROPERTIES: &str = "properties";
pub(crate) const ARG_RATE_POIS: &str = "pois";
pub(crate) const ARG_RATE_ROUTES: &str = "routes";
pub(crate) const ARG_RATE_AMENITIES: &str = "amenities";
pub(crate) const ENV_RATE_PROPERTIES: &str = "NESTRANK_CMDS_RATE_PROPERTIES";
pub(crate) const ENV_RATE_POIS: &str = "NESTRANK_CMDS_RATE_POIS";

/// Run the nestrank CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering,
/// input loading, or report writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rate(args) => rate::run_rate(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nestrank",
    about = "Score candidate rental properties against points of interest",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the scoring pipeline and emit a rating report.
    Rate(rate::RateArgs),
}
