//! Integration tests for the suite runner bridge
//!
//! Exercises the externally observable contract: suite runs reduce to a
//! `{0, 1}` status, successive invocations are independent, and the FFI
//! exports hold that contract when called the way the managed harness
//! calls them.

use std::ffi::CString;
use std::ptr;

use condor_core::{RunConfig, Reporter, SuiteRunner, run_suite, run_test_suite};

/// Reporter that swallows everything; these tests assert on summaries.
struct NullReporter;

impl Reporter for NullReporter {
    fn on_case_complete(&mut self, _suite: &str, _case: &str, _outcome: &condor_core::CaseOutcome) {}
    fn on_run_complete(&mut self, _suite: &str, _summary: &condor_core::RunSummary) {}
}

fn passing_suite(r: &mut SuiteRunner<'_>) {
    r.case("arithmetic_holds", || {
        condor_core::check!(1 + 1 == 2);
        Ok(())
    });
    r.case("trivially_ok", || Ok(()));
}

fn failing_suite(r: &mut SuiteRunner<'_>) {
    r.case("passes", || Ok(()));
    r.case("fails", || {
        condor_core::check_eq!(2 + 2, 5);
        Ok(())
    });
}

fn empty_suite(_r: &mut SuiteRunner<'_>) {}

#[test]
fn all_passing_suite_reports_status_zero() {
    assert_eq!(run_test_suite(passing_suite), 0);
}

#[test]
fn one_failing_case_reports_status_one() {
    assert_eq!(run_test_suite(failing_suite), 1);
}

#[test]
fn empty_suite_is_vacuously_passing() {
    assert_eq!(run_test_suite(empty_suite), 0);
}

#[test]
fn successive_runs_do_not_interfere() {
    let config = RunConfig::default();
    let mut reporter = NullReporter;

    let first = run_suite("failing", failing_suite, &config, &mut reporter);
    let second = run_suite("failing", failing_suite, &config, &mut reporter);

    assert_eq!(first.passed, second.passed);
    assert_eq!(first.failed, second.failed);
    assert_eq!(first.status(), 1);
    assert_eq!(second.status(), 1);

    // A clean run right after a failing one is unaffected by it.
    assert_eq!(run_test_suite(passing_suite), 0);
}

#[test]
fn panicking_case_fails_without_aborting_the_run() {
    fn panics(r: &mut SuiteRunner<'_>) {
        r.case("explodes", || panic!("deliberate panic"));
        r.case("still_runs", || Ok(()));
    }

    let config = RunConfig::default();
    let mut reporter = NullReporter;
    let summary = run_suite("panics", panics, &config, &mut reporter);

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.status(), 1);
}

mod export_tests {
    use super::*;
    use condor::bridge::{
        Java_dev_condor_ndk_utils_StringUtilsTestSuite_run, condor_run_suite, condor_suite_count,
    };

    #[test]
    fn jni_export_runs_the_utilities_suite() {
        // The managed harness passes its environment and receiver handles;
        // the export ignores both.
        let status = Java_dev_condor_ndk_utils_StringUtilsTestSuite_run(
            ptr::null_mut(),
            ptr::null_mut(),
        );
        assert_eq!(status, 0);
    }

    #[test]
    fn jni_export_calls_are_independent() {
        let first =
            Java_dev_condor_ndk_utils_StringUtilsTestSuite_run(ptr::null_mut(), ptr::null_mut());
        let second =
            Java_dev_condor_ndk_utils_StringUtilsTestSuite_run(ptr::null_mut(), ptr::null_mut());
        assert_eq!(first, 0);
        assert_eq!(second, 0);
    }

    #[test]
    fn dispatch_runs_registered_suites_by_name() {
        let name = CString::new("utilities").unwrap();
        let status = unsafe { condor_run_suite(name.as_ptr()) };
        assert_eq!(status, 0);
    }

    #[test]
    fn dispatch_reports_unknown_suites_as_failure() {
        let name = CString::new("no_such_suite").unwrap();
        let status = unsafe { condor_run_suite(name.as_ptr()) };
        assert_eq!(status, 1);
    }

    #[test]
    fn dispatch_rejects_a_null_name() {
        let status = unsafe { condor_run_suite(ptr::null()) };
        assert_eq!(status, 1);
    }

    #[test]
    fn suite_count_sees_the_builtin_suite() {
        assert!(condor_suite_count() >= 1);
    }
}
