//! Process-global suite registry.
//!
//! The registry replaces link-time forward declarations of suites with an
//! explicit name → procedure mapping: callers register suites once, then
//! dispatch runs by name. Registration is additive; there is no
//! unregistration, and running a suite mutates nothing in the registry,
//! so concurrent dispatches stay independent.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::config::RunConfig;
use crate::error::HarnessError;
use crate::reporter::Reporter;
use crate::runner::{self, RunSummary, SuiteFn};

static REGISTRY: Mutex<BTreeMap<&'static str, SuiteFn>> = Mutex::new(BTreeMap::new());

/// Register a suite under a unique name.
pub fn register_suite(name: &'static str, suite: SuiteFn) -> Result<(), HarnessError> {
    let mut registry = REGISTRY.lock().map_err(|_| HarnessError::RegistryPoisoned)?;
    if registry.contains_key(name) {
        return Err(HarnessError::DuplicateSuite(name));
    }
    registry.insert(name, suite);
    Ok(())
}

/// Run the suite registered under `name`.
///
/// The registry lock is released before the suite executes, so suites are
/// free to call back into the registry (e.g. to list their siblings).
pub fn run_registered(
    name: &str,
    config: &RunConfig,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary, HarnessError> {
    let suite = {
        let registry = REGISTRY.lock().map_err(|_| HarnessError::RegistryPoisoned)?;
        registry
            .get(name)
            .copied()
            .ok_or_else(|| HarnessError::UnknownSuite(name.to_string()))?
    };
    Ok(runner::run_suite(name, suite, config, reporter))
}

/// Names of all registered suites, in sorted order.
pub fn suite_names() -> Result<Vec<&'static str>, HarnessError> {
    let registry = REGISTRY.lock().map_err(|_| HarnessError::RegistryPoisoned)?;
    Ok(registry.keys().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::LogReporter;
    use crate::runner::SuiteRunner;

    fn noop_suite(_r: &mut SuiteRunner<'_>) {}

    fn one_pass_one_fail(r: &mut SuiteRunner<'_>) {
        r.case("passes", || Ok(()));
        r.case("fails", || {
            crate::fail_case!("deliberate failure");
        });
    }

    // Registered names are process-global and tests share the process, so
    // each test registers under its own name.

    #[test]
    fn duplicate_registration_is_rejected() {
        register_suite("registry_dup", noop_suite).unwrap();
        assert_eq!(
            register_suite("registry_dup", noop_suite),
            Err(HarnessError::DuplicateSuite("registry_dup"))
        );
    }

    #[test]
    fn unknown_suite_is_an_error_not_a_crash() {
        let config = RunConfig::default();
        let mut reporter = LogReporter;
        let err = run_registered("registry_no_such", &config, &mut reporter).unwrap_err();
        assert_eq!(err, HarnessError::UnknownSuite("registry_no_such".into()));
    }

    #[test]
    fn dispatch_runs_by_name_and_derives_status() {
        register_suite("registry_mixed", one_pass_one_fail).unwrap();
        let config = RunConfig::default();
        let mut reporter = LogReporter;

        let summary = run_registered("registry_mixed", &config, &mut reporter).unwrap();
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.status(), 1);

        // A second dispatch starts from a fresh context.
        let again = run_registered("registry_mixed", &config, &mut reporter).unwrap();
        assert_eq!(again.passed, summary.passed);
        assert_eq!(again.failed, summary.failed);
        assert_eq!(again.status(), 1);
    }

    #[test]
    fn registered_names_are_listed_sorted() {
        register_suite("registry_list_b", noop_suite).unwrap();
        register_suite("registry_list_a", noop_suite).unwrap();
        let names = suite_names().unwrap();
        let a = names.iter().position(|n| *n == "registry_list_a").unwrap();
        let b = names.iter().position(|n| *n == "registry_list_b").unwrap();
        assert!(a < b);
    }
}
