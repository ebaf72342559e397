//! Checkable units of work for guided recipes.
//!
//! A [`Checkable`](checkable::Checkable) is parsed from its JSON definition,
//! holds ordered [`Step`](checkable::Step)s, and is either confirmed by hand
//! or verified by running its [`Checker`](checker::Checker)s concurrently.

pub mod checkable;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod logging;

use clap::Parser;

pub use checkable::{Checkable, CheckableError, Step};
pub use checker::{checker_from_json, CheckFuture, Checker, CheckerError};

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
