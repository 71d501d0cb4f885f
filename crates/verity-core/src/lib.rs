//! Verity Core - assertion and comparison helpers for test suites
//!
//! This crate provides:
//! - Ordering assertions over optional values (absent sorts first)
//! - Floating-point equality within a variance, with fixed-width rendering
//! - Sequence equality with bounded positional diffs
//! - Multiset collection equality by hash, key or predicate
//! - Failure-shape assertions over `Result`, sync and async
//! - Runtime-variant expectations and scoped ambient locale
//! - A case runner with structured boundary logging
//!
//! Every check returns [`Result<()>`](errors::Result); failures are
//! [`AssertionFailure`] values with a stable code.

pub mod collection;
pub mod converter;
pub mod errors;
pub mod float;
pub mod locale;
pub mod logging_facility;
pub mod ordering;
pub mod runner;
pub mod sequence;
pub mod shape;
pub mod strings;
pub mod throws;
pub mod variant;

pub use verity_core_types as core_types;

// Re-export commonly used types
pub use errors::{AssertionFailure, FailureKind, Mismatch, Result};
pub use runner::{run_case, CaseOutcome};
pub use shape::{CancellationHandle, FailureShape};
pub use variant::{Expectation, RuntimeVariant, VariantExpectation};
