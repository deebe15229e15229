//! Harness error types.
//!
//! Test-case failures are not errors; they aggregate into a
//! [`RunSummary`](crate::runner::RunSummary). These errors cover the
//! registry and dispatch layers, where a run cannot be started at all.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HarnessError {
    #[error("unknown suite '{0}'")]
    UnknownSuite(String),

    #[error("suite '{0}' is already registered")]
    DuplicateSuite(&'static str),

    #[error("suite registry lock poisoned")]
    RegistryPoisoned,
}
