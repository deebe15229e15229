//! Test case outcomes and failure values.
//!
//! Case bodies return [`CaseResult`]; the `check!` family of macros produces
//! [`CaseFailure`] values that carry the location of the failing check so
//! reports can point at it directly.

use std::fmt;
use std::time::Duration;

/// A failed check inside a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    /// Human-readable description of what went wrong.
    pub message: String,
    /// Source file containing the failing check.
    pub file: &'static str,
    /// Line of the failing check.
    pub line: u32,
}

impl CaseFailure {
    pub fn new(message: impl Into<String>, file: &'static str, line: u32) -> Self {
        Self {
            message: message.into(),
            file,
            line,
        }
    }
}

impl fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.message)
    }
}

/// Result type returned by test case bodies.
pub type CaseResult = Result<(), CaseFailure>;

/// Outcome of one executed (or skipped) test case.
///
/// Failures carry a rendered message rather than the original
/// [`CaseFailure`] because panics caught at the harness boundary have no
/// structured form to preserve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed(Duration),
    Failed(Duration, String),
    Skipped(String),
}

impl CaseOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, CaseOutcome::Failed(..))
    }
}

/// Fail the current case unless the condition holds.
///
/// With a single argument the condition itself becomes the message;
/// additional arguments are formatted as with `format!`.
#[macro_export]
macro_rules! check {
    ($cond:expr) => {
        if !$cond {
            return Err($crate::case::CaseFailure::new(
                concat!("check failed: ", stringify!($cond)),
                file!(),
                line!(),
            ));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::case::CaseFailure::new(format!($($arg)+), file!(), line!()));
        }
    };
}

/// Fail the current case unless both values are equal.
#[macro_export]
macro_rules! check_eq {
    ($left:expr, $right:expr) => {{
        let (left, right) = (&$left, &$right);
        if left != right {
            return Err($crate::case::CaseFailure::new(
                format!(
                    "check failed: left != right\n  left:  {:?}\n  right: {:?}",
                    left, right
                ),
                file!(),
                line!(),
            ));
        }
    }};
}

/// Fail the current case if both values are equal.
#[macro_export]
macro_rules! check_ne {
    ($left:expr, $right:expr) => {{
        let (left, right) = (&$left, &$right);
        if left == right {
            return Err($crate::case::CaseFailure::new(
                format!(
                    "check failed: left == right\n  left:  {:?}\n  right: {:?}",
                    left, right
                ),
                file!(),
                line!(),
            ));
        }
    }};
}

/// Explicitly fail the current case with a formatted message.
#[macro_export]
macro_rules! fail_case {
    ($($arg:tt)+) => {
        return Err($crate::case::CaseFailure::new(format!($($arg)+), file!(), line!()))
    };
}
