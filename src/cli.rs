//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `checkable`.
#[derive(Debug, Parser)]
#[command(name = "checkable", version, about = "Inspect and verify checkable units of work")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the steps and verification mode of a checkable definition.
    Show {
        /// Path to a JSON or YAML checkable definition.
        path: PathBuf,
        /// Runtime identifier to assign to the checkable.
        #[arg(long)]
        id: Option<u64>,
        /// Print the normalized JSON definition instead of a summary.
        #[arg(long)]
        json: bool,
    },
    /// Run every checker of a checkable and report whether all passed.
    Verify {
        /// Path to a JSON or YAML checkable definition.
        path: PathBuf,
        /// Runtime identifier to assign to the checkable.
        #[arg(long)]
        id: Option<u64>,
    },
}
