//! Reporting hooks for suite execution.
//!
//! The runner is decoupled from output via the [`Reporter`] trait, so the
//! same suites can report to the platform log (FFI bridge), a console
//! (host-side runner), or a machine-readable report without changing
//! execution logic.

use crate::case::CaseOutcome;
use crate::runner::RunSummary;

/// Fixed tag under which bridge-side progress lines are logged.
pub const LOG_TARGET: &str = "CondorNdkTest";

pub trait Reporter {
    /// Called once before any case of the suite executes.
    fn on_suite_start(&mut self, _suite: &str) {}

    /// Called when a case completes (or is skipped).
    fn on_case_complete(&mut self, suite: &str, case: &str, outcome: &CaseOutcome);

    /// Called after the suite has run to completion.
    fn on_run_complete(&mut self, suite: &str, summary: &RunSummary);
}

/// Reporter that routes progress to the platform log facility via `tracing`.
///
/// The embedding process has no attached console, so nothing is written to
/// stdout; lines are emitted as WARN events under [`LOG_TARGET`] and the
/// host application's subscriber decides where they land.
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn on_suite_start(&mut self, suite: &str) {
        tracing::warn!(target: LOG_TARGET, "suite {suite}: starting");
    }

    fn on_case_complete(&mut self, suite: &str, case: &str, outcome: &CaseOutcome) {
        match outcome {
            CaseOutcome::Passed(duration) => {
                tracing::warn!(
                    target: LOG_TARGET,
                    "{suite}::{case} PASSED ({}ms)",
                    duration.as_millis()
                );
            }
            CaseOutcome::Failed(duration, message) => {
                tracing::warn!(
                    target: LOG_TARGET,
                    "{suite}::{case} FAILED ({}ms): {message}",
                    duration.as_millis()
                );
            }
            CaseOutcome::Skipped(reason) => {
                tracing::warn!(target: LOG_TARGET, "{suite}::{case} SKIPPED ({reason})");
            }
        }
    }

    fn on_run_complete(&mut self, suite: &str, summary: &RunSummary) {
        tracing::warn!(
            target: LOG_TARGET,
            "suite {suite}: {} passed, {} failed, {} skipped in {:.2}s",
            summary.passed,
            summary.failed,
            summary.skipped,
            summary.duration.as_secs_f64()
        );
    }
}

/// Console reporter for the host-side runner (pytest-style).
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    pub verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn on_suite_start(&mut self, suite: &str) {
        eprintln!("\x1b[1m=== suite {} ===\x1b[0m", suite);
    }

    fn on_case_complete(&mut self, _suite: &str, case: &str, outcome: &CaseOutcome) {
        let status = match outcome {
            CaseOutcome::Passed(d) => {
                if self.verbose {
                    format!("\x1b[32mPASSED\x1b[0m ({:.0}ms)", d.as_millis())
                } else {
                    "\x1b[32m.\x1b[0m".to_string()
                }
            }
            CaseOutcome::Failed(d, _) => {
                if self.verbose {
                    format!("\x1b[31mFAILED\x1b[0m ({:.0}ms)", d.as_millis())
                } else {
                    "\x1b[31mF\x1b[0m".to_string()
                }
            }
            CaseOutcome::Skipped(reason) => {
                if reason.is_empty() {
                    "\x1b[33mSKIPPED\x1b[0m".to_string()
                } else {
                    format!("\x1b[33mSKIPPED\x1b[0m ({})", reason)
                }
            }
        };

        if self.verbose {
            eprintln!("{} ... {}", case, status);
        } else {
            eprint!("{}", status);
        }

        // Failure details always print, even in dot mode
        if let CaseOutcome::Failed(_, message) = outcome {
            eprintln!("\n\x1b[31m{}\x1b[0m", case);
            eprintln!("{}", message);
        }
    }

    fn on_run_complete(&mut self, _suite: &str, summary: &RunSummary) {
        if !self.verbose {
            eprintln!();
        }

        let mut parts = Vec::new();
        if summary.passed > 0 {
            parts.push(format!("\x1b[32m{} passed\x1b[0m", summary.passed));
        }
        if summary.failed > 0 {
            parts.push(format!("\x1b[31m{} failed\x1b[0m", summary.failed));
        }
        if summary.skipped > 0 {
            parts.push(format!("\x1b[33m{} skipped\x1b[0m", summary.skipped));
        }
        if parts.is_empty() {
            parts.push("0 cases".to_string());
        }

        eprintln!(
            "====== {} in {:.2}s ======",
            parts.join(", "),
            summary.duration.as_secs_f64()
        );
    }
}
