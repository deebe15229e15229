//! Run configuration for suite execution.

/// How much per-case progress the reporter should see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Progress {
    /// Report every case as it completes.
    #[default]
    All,
    /// Report only the end-of-run summary.
    Summary,
}

/// Configuration options for a single suite run.
///
/// `Default` reproduces the zero-argument invocation used by the FFI
/// bridge: full progress, no filter, run every case to the end.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub progress: Progress,
    /// Substring filter; cases whose names do not contain it are skipped.
    pub filter: Option<String>,
    /// Stop executing remaining cases after the first failure.
    pub fail_fast: bool,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a case with this name should execute under the filter.
    pub fn selects(&self, case_name: &str) -> bool {
        match &self.filter {
            Some(keyword) => case_name.contains(keyword.as_str()),
            None => true,
        }
    }
}
