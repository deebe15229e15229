//! CLI module for the condor host-side runner
//!
//! The same suites the managed harness drives through the FFI bridge can
//! run on a development host, with console output and an optional JSON
//! report.
//!
//! ## Commands
//!
//! - `list` - Print registered suites
//! - `run [SUITE]` - Run one suite, or all of them
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Only the top-level `run()` function handles errors
//! and exits.

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Host-side runner for condor native test suites
#[derive(Parser, Debug)]
#[command(name = "condor")]
#[command(version = VERSION)]
#[command(about = "Host-side runner for condor native test suites", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print registered suites
    List,
    /// Run a suite (all suites when no name is given)
    Run {
        /// Suite name
        #[arg(value_name = "SUITE")]
        suite: Option<String>,

        /// Report every case as it completes
        #[arg(short, long)]
        verbose: bool,

        /// Only run cases whose name contains this substring
        #[arg(short, long, value_name = "KEYWORD")]
        filter: Option<String>,

        /// Stop at the first failing case
        #[arg(long)]
        fail_fast: bool,

        /// Emit a JSON report on stdout instead of console output
        #[arg(long)]
        json: bool,
    },
}

/// Parse arguments, dispatch to a command, and exit with its code.
pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::List => commands::list_suites(),
        Command::Run {
            suite,
            verbose,
            filter,
            fail_fast,
            json,
        } => commands::run_suites(suite.as_deref(), verbose, filter, fail_fast, json),
    };

    match result {
        Ok(code) => process::exit(code.0),
        Err(err) => {
            if !err.message.is_empty() {
                eprintln!("{err}");
            }
            process::exit(err.exit_code.0);
        }
    }
}
