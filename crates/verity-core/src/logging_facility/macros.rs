//! Canonical logging macros
//!
//! Field keys and event names come from `verity_core_types::schema`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use verity_core::log_op_start;
/// log_op_start!("run_case");
/// log_op_start!("run_case", case = "parses_header");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($($field)*)?
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use verity_core::log_op_end;
/// log_op_end!("run_case", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        );
    };
}

/// Log an operation that ended in an assertion failure
///
/// # Example
///
/// ```
/// # use verity_core::log_op_error;
/// # use verity_core::errors::{AssertionFailure, FailureKind};
/// let failure = AssertionFailure::new(FailureKind::CountMismatch);
/// log_op_error!("run_case", failure, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let failure: $crate::errors::AssertionFailure = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?failure.kind(),
            err.code = failure.code(),
            $($($field)*)?
        );
    }};
}
