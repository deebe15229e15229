//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use condor_core::{
    ConsoleReporter, JsonReporter, Reporter, RunConfig, run_registered, suite_names,
};

use super::{CliError, CliResult, ExitCode};

/// Make sure the built-in suites are registered, exactly once.
fn ensure_registered() -> CliResult<()> {
    // The CLI is the only registrar in this process, so a duplicate error
    // can only mean run() was re-entered; surface anything else.
    match crate::suites::register_builtin_suites() {
        Ok(()) => Ok(()),
        Err(condor_core::HarnessError::DuplicateSuite(_)) => Ok(()),
        Err(err) => Err(CliError::failure(err.to_string())),
    }
}

/// Print registered suite names, one per line.
pub fn list_suites() -> CliResult<ExitCode> {
    ensure_registered()?;
    let names = suite_names().map_err(|err| CliError::failure(err.to_string()))?;
    for name in names {
        println!("{name}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Run one suite (or all of them) and derive the process exit code.
pub fn run_suites(
    suite: Option<&str>,
    verbose: bool,
    filter: Option<String>,
    fail_fast: bool,
    json: bool,
) -> CliResult<ExitCode> {
    ensure_registered()?;

    let targets: Vec<String> = match suite {
        Some(name) => vec![name.to_string()],
        None => suite_names()
            .map_err(|err| CliError::failure(err.to_string()))?
            .iter()
            .map(|name| name.to_string())
            .collect(),
    };

    let config = RunConfig {
        filter,
        fail_fast,
        ..RunConfig::default()
    };

    if json {
        let mut reporter = JsonReporter::new();
        let failed = run_targets(&targets, &config, &mut reporter)?;
        let rendered = reporter
            .to_json()
            .map_err(|err| CliError::failure(format!("could not render report: {err}")))?;
        println!("{rendered}");
        return Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS });
    }

    let mut reporter = ConsoleReporter::new(verbose);
    let failed = run_targets(&targets, &config, &mut reporter)?;
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// Run each target suite; true when any case failed.
fn run_targets(
    targets: &[String],
    config: &RunConfig,
    reporter: &mut dyn Reporter,
) -> CliResult<bool> {
    let mut failed = false;
    for name in targets {
        let summary = run_registered(name, config, reporter)
            .map_err(|err| CliError::failure(err.to_string()))?;
        failed |= summary.status() != 0;
    }
    Ok(failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use condor_core::register_suite;

    #[test]
    fn unknown_suite_maps_to_cli_failure() {
        ensure_registered().unwrap();
        let err = run_suites(Some("no_such_suite"), false, None, false, false).unwrap_err();
        assert!(err.message.contains("unknown suite"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn builtin_utilities_suite_passes() {
        ensure_registered().unwrap();
        let code = run_suites(Some("utilities"), false, None, false, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn list_includes_builtin_suite() {
        ensure_registered().unwrap();
        let names = suite_names().unwrap();
        assert!(names.contains(&"utilities"));
    }

    #[test]
    fn registration_helper_tolerates_reentry() {
        ensure_registered().unwrap();
        ensure_registered().unwrap();
    }

    #[test]
    fn fresh_registration_of_new_suite_is_visible() {
        fn extra(_r: &mut condor_core::SuiteRunner<'_>) {}
        register_suite("cli_extra_suite", extra).unwrap();
        assert!(suite_names().unwrap().contains(&"cli_extra_suite"));
    }
}
