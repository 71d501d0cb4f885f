//! Structured logging facility for Verity
//!
//! - Single initialization point via `init(profile)`
//! - Boundary logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//!   used by the case runner; individual checks only emit `tracing::debug!`
//! - Test capture mode for asserting on emitted events
//!
//! # Usage
//!
//! ```rust
//! use verity_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
