//! Suite runner, registry, and reporting engine for the condor harness.
//!
//! ## Modules
//!
//! - `case` — case outcomes, failure values, and the `check!` macros
//! - `config` — per-run configuration (verbosity, filter, fail-fast)
//! - `runner` — suite execution and summary aggregation
//! - `registry` — process-global name → suite dispatch
//! - `reporter` — log/console reporting hooks
//! - `report` — serializable run reports (`json` feature)
//! - `error` — registry and dispatch errors
//!
//! ## Design
//!
//! A run is synchronous and self-contained: each call builds a fresh
//! context, executes the suite on the calling thread, and discards the
//! context after deriving a `{0, 1}` status. Case failures (including
//! panics) are aggregated, never propagated.

pub mod case;
pub mod config;
pub mod error;
pub mod registry;
#[cfg(feature = "json")]
pub mod report;
pub mod reporter;
pub mod runner;

pub use case::{CaseFailure, CaseOutcome, CaseResult};
pub use config::{Progress, RunConfig};
pub use error::HarnessError;
pub use registry::{register_suite, run_registered, suite_names};
#[cfg(feature = "json")]
pub use report::{CaseRecord, JsonReporter, RunReport};
pub use reporter::{ConsoleReporter, LOG_TARGET, LogReporter, Reporter};
pub use runner::{RunSummary, SuiteFn, SuiteRunner, run_suite, run_test_suite};
