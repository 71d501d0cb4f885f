//! Case runner with boundary logging
//!
//! ## Logging Ownership
//!
//! `run_case` owns lifecycle logging for a test case:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The checks it runs only emit `tracing::debug!` for the failure code.

use std::time::Instant;

use serde::Serialize;

use crate::errors::{AssertionFailure, FailureKind, Result};
use crate::{log_op_end, log_op_error, log_op_start};

const OP_RUN_CASE: &str = "run_case";

/// Result of running one case
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    name: String,
    duration_ms: u64,
    failure: Option<AssertionFailure>,
}

impl CaseOutcome {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }

    pub fn failure(&self) -> Option<&AssertionFailure> {
        self.failure.as_ref()
    }

    /// Hand the failure back to a `Result`-returning test
    ///
    /// # Errors
    /// The case's `AssertionFailure`, if it failed.
    pub fn into_result(self) -> Result<()> {
        match self.failure {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    /// Serializable summary for CI reporting
    pub fn report(&self) -> CaseReport {
        CaseReport {
            case: self.name.clone(),
            passed: self.passed(),
            duration_ms: self.duration_ms,
            kind: self.failure.as_ref().map(AssertionFailure::kind),
            code: self.failure.as_ref().map(AssertionFailure::code),
            diagnostic: self.failure.as_ref().map(AssertionFailure::diagnostic),
        }
    }
}

/// Machine-readable case summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReport {
    pub case: String,
    pub passed: bool,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl CaseReport {
    /// Render the report as a single JSON line
    ///
    /// # Errors
    /// Propagates `serde_json` serialization errors.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Run one case and record its outcome
///
/// # Example
///
/// ```
/// use verity_core::runner::run_case;
/// use verity_core::sequence::sequence_equal;
///
/// let outcome = run_case("short_sequences", || sequence_equal(&[1, 2], &[1, 2]));
/// assert!(outcome.passed());
/// ```
pub fn run_case<F>(name: &str, case: F) -> CaseOutcome
where
    F: FnOnce() -> Result<()>,
{
    log_op_start!(OP_RUN_CASE, case = name);
    let start = Instant::now();

    let result = case();
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(()) => {
            log_op_end!(OP_RUN_CASE, duration_ms = duration_ms, case = name);
        }
        Err(failure) => {
            log_op_error!(OP_RUN_CASE, failure.clone(), duration_ms = duration_ms, case = name);
        }
    }

    CaseOutcome {
        name: name.to_string(),
        duration_ms,
        failure: result.err(),
    }
}

/// Panic with the rendered diagnostic when a check fails
///
/// For call sites that cannot return `Result`. An optional format message is
/// prefixed to the diagnostic.
///
/// # Example
///
/// ```should_panic
/// use verity_core::verify;
/// use verity_core::ordering::greater_than;
///
/// verify!(greater_than(Some(1), Some(2), None), "retry budget");
/// ```
#[macro_export]
macro_rules! verify {
    ($check:expr $(,)?) => {
        if let ::std::result::Result::Err(failure) = $check {
            panic!("{}", failure);
        }
    };
    ($check:expr, $($arg:tt)+) => {
        if let ::std::result::Result::Err(failure) = $check {
            panic!("{}: {}", format_args!($($arg)+), failure);
        }
    };
}
