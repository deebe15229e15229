//! FFI entry points for the managed test harness.
//!
//! Each built-in suite gets one JNI-mangled export, mirroring the 1:1
//! symbol-per-suite contract of the instrumentation side; `condor_run_suite`
//! is the generalized dispatch that looks a suite up by name instead.
//! Every export runs one suite synchronously on the calling thread and
//! reduces the outcome to `0` (all cases passed) or `1`.

use std::ffi::{CStr, c_char, c_int, c_void};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use condor_core::{LOG_TARGET, LogReporter, RunConfig, run_registered};

static INIT: Once = Once::new();

/// Register built-in suites and install the fallback log subscriber.
///
/// The embedding application may install its own `tracing` subscriber
/// before the first call; the fallback writes to stderr, never stdout
/// (the host process has no attached console).
fn ensure_initialized() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .try_init();
        if let Err(err) = crate::suites::register_builtin_suites() {
            tracing::warn!(target: LOG_TARGET, "suite registration failed: {err}");
        }
    });
}

/// Run the named registered suite and reduce the outcome to `{0, 1}`.
///
/// Failures to even start the run (unknown suite, poisoned registry, a
/// panic in the harness itself) report as `1`; no panic unwinds past the
/// exports above this.
fn dispatch(name: &str) -> c_int {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let config = RunConfig::default();
        let mut reporter = LogReporter;
        run_registered(name, &config, &mut reporter).map(|summary| summary.status())
    }));

    match result {
        Ok(Ok(status)) => status as c_int,
        Ok(Err(err)) => {
            tracing::warn!(target: LOG_TARGET, "suite '{name}' did not run: {err}");
            1
        }
        Err(_) => {
            tracing::warn!(target: LOG_TARGET, "harness panicked while running suite '{name}'");
            1
        }
    }
}

/// Entry point bound to `dev.condor.ndk.utils.StringUtilsTestSuite#run`.
///
/// The environment and receiver handles are required by the calling
/// convention and otherwise unused.
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "system" fn Java_dev_condor_ndk_utils_StringUtilsTestSuite_run(
    _env: *mut c_void,
    _this: *mut c_void,
) -> c_int {
    ensure_initialized();
    dispatch("utilities")
}

/// Generalized dispatch: run the suite registered under `name`.
///
/// # Safety
///
/// `name` must be null or a valid NUL-terminated string. Null and
/// non-UTF-8 names fail the run (status `1`) rather than crashing.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn condor_run_suite(name: *const c_char) -> c_int {
    ensure_initialized();

    if name.is_null() {
        tracing::warn!(target: LOG_TARGET, "condor_run_suite called with a null suite name");
        return 1;
    }

    match unsafe { CStr::from_ptr(name) }.to_str() {
        Ok(name) => dispatch(name),
        Err(_) => {
            tracing::warn!(target: LOG_TARGET, "condor_run_suite called with a non-UTF-8 suite name");
            1
        }
    }
}

/// Number of registered suites, for harness sanity checks.
///
/// Returns `-1` if the registry is unusable.
#[unsafe(no_mangle)]
pub extern "C" fn condor_suite_count() -> c_int {
    ensure_initialized();
    match condor_core::suite_names() {
        Ok(names) => names.len() as c_int,
        Err(_) => -1,
    }
}
