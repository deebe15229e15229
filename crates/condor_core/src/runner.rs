//! Suite execution engine.
//!
//! A suite is a plain function that receives a [`SuiteRunner`] and calls
//! [`SuiteRunner::case`] once per test case. Each run builds a fresh
//! context, so successive invocations are independent.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use crate::case::{CaseOutcome, CaseResult};
use crate::config::{Progress, RunConfig};
use crate::reporter::{LogReporter, Reporter};

/// A named, parameterless procedure that registers and runs test cases.
pub type SuiteFn = fn(&mut SuiteRunner<'_>);

/// Aggregated result of one suite run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration: Duration,
}

impl RunSummary {
    /// Exit status for the run: `0` when no case failed (vacuously `0`
    /// for an empty suite), `1` otherwise.
    pub fn status(&self) -> i32 {
        if self.failed == 0 { 0 } else { 1 }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }
}

/// Handle given to suite procedures for running their cases.
pub struct SuiteRunner<'a> {
    suite: &'a str,
    config: &'a RunConfig,
    reporter: &'a mut dyn Reporter,
    summary: RunSummary,
    halted: bool,
}

impl<'a> SuiteRunner<'a> {
    fn new(suite: &'a str, config: &'a RunConfig, reporter: &'a mut dyn Reporter) -> Self {
        Self {
            suite,
            config,
            reporter,
            summary: RunSummary::default(),
            halted: false,
        }
    }

    /// Name of the suite currently executing.
    pub fn suite(&self) -> &str {
        self.suite
    }

    /// Execute a single test case.
    ///
    /// The body either returns a [`CaseResult`] or panics; both failure
    /// paths are captured and aggregated, never propagated. A panicking
    /// case does not abort the suite.
    pub fn case<F>(&mut self, name: &str, body: F)
    where
        F: FnOnce() -> CaseResult,
    {
        if self.halted {
            self.record(name, CaseOutcome::Skipped("fail-fast".to_string()));
            return;
        }

        if !self.config.selects(name) {
            self.record(name, CaseOutcome::Skipped("filtered out".to_string()));
            return;
        }

        let start = Instant::now();
        let result = panic::catch_unwind(AssertUnwindSafe(body));
        let elapsed = start.elapsed();

        let outcome = match result {
            Ok(Ok(())) => CaseOutcome::Passed(elapsed),
            Ok(Err(failure)) => CaseOutcome::Failed(elapsed, failure.to_string()),
            Err(payload) => CaseOutcome::Failed(elapsed, panic_message(payload)),
        };

        if self.config.fail_fast && outcome.is_failure() {
            self.halted = true;
        }
        self.record(name, outcome);
    }

    /// Record a case as skipped without executing it.
    pub fn skip(&mut self, name: &str, reason: &str) {
        self.record(name, CaseOutcome::Skipped(reason.to_string()));
    }

    fn record(&mut self, name: &str, outcome: CaseOutcome) {
        match &outcome {
            CaseOutcome::Passed(_) => self.summary.passed += 1,
            CaseOutcome::Failed(..) => self.summary.failed += 1,
            CaseOutcome::Skipped(_) => self.summary.skipped += 1,
        }
        if self.config.progress == Progress::All {
            self.reporter.on_case_complete(self.suite, name, &outcome);
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked with a non-string payload".to_string()
    }
}

/// Run one suite procedure to completion and aggregate its outcome.
pub fn run_suite(
    name: &str,
    suite: SuiteFn,
    config: &RunConfig,
    reporter: &mut dyn Reporter,
) -> RunSummary {
    reporter.on_suite_start(name);
    let start = Instant::now();

    let mut summary = {
        let mut runner = SuiteRunner::new(name, config, reporter);
        suite(&mut runner);
        runner.summary
    };
    summary.duration = start.elapsed();

    reporter.on_run_complete(name, &summary);
    summary
}

/// Run a suite with default configuration and the platform log reporter,
/// returning `0` if every case passed and `1` otherwise.
///
/// This is the contract the FFI exports reduce to: one synchronous,
/// self-contained run per call, with no state carried between calls.
pub fn run_test_suite(suite: SuiteFn) -> i32 {
    let config = RunConfig::default();
    let mut reporter = LogReporter;
    run_suite("suite", suite, &config, &mut reporter).status()
}
