//! Built-in test suites.
//!
//! Suites live in separate modules to keep the bridge entry point small.
//! Adding a suite means writing its module and listing it in
//! [`register_builtin_suites`]; the bridge dispatches by registry name.

pub mod utilities;

use condor_core::HarnessError;

/// Register every built-in suite with the global registry.
///
/// Registration is not idempotent (duplicate names error), so callers
/// guard this with a `Once` or call it exactly once per process.
pub fn register_builtin_suites() -> Result<(), HarnessError> {
    condor_core::register_suite("utilities", utilities::suite_utilities)?;
    Ok(())
}
