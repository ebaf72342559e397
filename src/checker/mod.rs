//! Pluggable checkers that decide whether a checkable's work is done.
//!
//! A checker is described by a JSON object whose `type` field selects the
//! concrete kind. [`checker_from_json`] is the only place that maps a
//! discriminator to an implementation; adding a kind means adding one
//! struct and one arm there.

mod env;
mod factory;
mod file;

use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use serde_json::Value;
use thiserror::Error;

pub use env::EnvVar;
pub use factory::{checker_from_json, KNOWN_KINDS};
pub use file::{FileContains, FileExists};

/// Boxed future type alias used by [`Checker`] to keep the trait dyn-compatible.
pub type CheckFuture<'a> = Pin<Box<dyn Future<Output = Result<bool, CheckerError>> + Send + 'a>>;

/// A single checker run that could not produce a pass/fail answer.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// Reading from the filesystem failed.
    #[error("failed to inspect {}: {source}", path.display())]
    Io {
        /// The path being inspected.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// An environment variable held a value that is not valid unicode.
    #[error("environment variable {name} is not valid unicode")]
    NotUnicode {
        /// The variable name.
        name: String,
    },
}

/// Determines pass/fail for one verification concern.
pub trait Checker: Send + Sync + fmt::Debug {
    /// The discriminator this checker is registered under.
    fn kind(&self) -> &'static str;

    /// Runs the check.
    ///
    /// # Errors
    ///
    /// Returns an error when the check cannot reach a verdict.
    fn run(&self) -> CheckFuture<'_>;

    /// Serializes the checker back to its defining description.
    fn as_json(&self) -> Value;
}
