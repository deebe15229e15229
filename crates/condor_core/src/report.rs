//! Machine-readable run reports (`json` feature).
//!
//! [`JsonReporter`] accumulates one [`RunReport`] per suite run; the
//! host-side runner serializes the collection for CI consumption.

use serde::Serialize;

use crate::case::CaseOutcome;
use crate::reporter::Reporter;
use crate::runner::RunSummary;

#[derive(Debug, Clone, Serialize)]
pub struct CaseRecord {
    pub name: String,
    pub status: &'static str,
    pub duration_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub suite: String,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration_ms: u128,
    pub status: i32,
    pub cases: Vec<CaseRecord>,
}

/// Reporter that accumulates serializable reports instead of printing.
#[derive(Debug, Default)]
pub struct JsonReporter {
    pending: Vec<CaseRecord>,
    finished: Vec<RunReport>,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports for every completed suite run so far.
    pub fn reports(&self) -> &[RunReport] {
        &self.finished
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.finished)
    }
}

impl Reporter for JsonReporter {
    fn on_case_complete(&mut self, _suite: &str, case: &str, outcome: &CaseOutcome) {
        let record = match outcome {
            CaseOutcome::Passed(d) => CaseRecord {
                name: case.to_string(),
                status: "passed",
                duration_ms: d.as_millis(),
                detail: None,
            },
            CaseOutcome::Failed(d, message) => CaseRecord {
                name: case.to_string(),
                status: "failed",
                duration_ms: d.as_millis(),
                detail: Some(message.clone()),
            },
            CaseOutcome::Skipped(reason) => CaseRecord {
                name: case.to_string(),
                status: "skipped",
                duration_ms: 0,
                detail: Some(reason.clone()),
            },
        };
        self.pending.push(record);
    }

    fn on_run_complete(&mut self, suite: &str, summary: &RunSummary) {
        self.finished.push(RunReport {
            suite: suite.to_string(),
            passed: summary.passed,
            failed: summary.failed,
            skipped: summary.skipped,
            duration_ms: summary.duration.as_millis(),
            status: summary.status(),
            cases: std::mem::take(&mut self.pending),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::runner::{SuiteRunner, run_suite};

    fn sample_suite(r: &mut SuiteRunner<'_>) {
        r.case("good", || Ok(()));
        r.case("bad", || {
            crate::fail_case!("expected failure");
        });
        r.skip("later", "not implemented on host");
    }

    #[test]
    fn report_captures_cases_and_status() {
        let config = RunConfig::default();
        let mut reporter = JsonReporter::new();
        run_suite("sample", sample_suite, &config, &mut reporter);

        let reports = reporter.reports();
        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.suite, "sample");
        assert_eq!(report.status, 1);
        assert_eq!(report.cases.len(), 3);
        assert_eq!(report.cases[0].status, "passed");
        assert_eq!(report.cases[1].status, "failed");
        assert!(report.cases[1].detail.as_deref().unwrap().contains("expected failure"));

        let json = reporter.to_json().unwrap();
        assert!(json.contains("\"suite\": \"sample\""));
    }
}
