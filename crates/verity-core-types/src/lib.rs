//! Core types shared across Verity facilities
//!
//! This crate provides foundational types used by the assertion library,
//! its logging facility and its configuration:
//!
//! - **Locale**: culture identifier used for ambient-locale scoping and
//!   culture-aware string checks
//! - **Schema constants**: Canonical field keys and event names

pub mod locale;
pub mod schema;

pub use locale::Locale;
