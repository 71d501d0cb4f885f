//! Failure shape: what the `throws` family can observe about an error
//!
//! An error type opts in by implementing [`FailureShape`]. Its `Kind`
//! identifies the class of failure (the thing an assertion expects), its
//! `Display` output is the failure message, and it may optionally name the
//! offending parameter or carry the cancellation handle that stopped it.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Observable shape of an error raised by an operation under test
pub trait FailureShape: fmt::Display {
    /// Classification compared by the assertions
    type Kind: Copy + PartialEq + fmt::Debug;

    /// The kind of this failure
    fn kind(&self) -> Self::Kind;

    /// Name of the argument this failure blames, if any
    fn param_name(&self) -> Option<&str> {
        None
    }

    /// Whether this failure reports a cancelled operation
    fn is_cancellation(&self) -> bool {
        false
    }

    /// Handle that cancelled the operation, if any
    fn cancellation(&self) -> Option<&CancellationHandle> {
        None
    }
}

/// Shared cancellation flag with identity
///
/// Clones share the same flag and compare equal. [`CancellationHandle::none`]
/// can never be cancelled; two `none` handles compare equal to each other.
#[derive(Clone, Default)]
pub struct CancellationHandle {
    flag: Option<Arc<AtomicBool>>,
}

impl CancellationHandle {
    /// A fresh, cancellable handle
    pub fn new() -> Self {
        Self {
            flag: Some(Arc::new(AtomicBool::new(false))),
        }
    }

    /// A handle that can never be cancelled
    pub fn none() -> Self {
        Self { flag: None }
    }

    pub fn can_be_cancelled(&self) -> bool {
        self.flag.is_some()
    }

    /// Request cancellation; a no-op on [`CancellationHandle::none`]
    pub fn cancel(&self) {
        if let Some(flag) = &self.flag {
            flag.store(true, Ordering::SeqCst);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}

impl PartialEq for CancellationHandle {
    fn eq(&self, other: &Self) -> bool {
        match (&self.flag, &other.flag) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Eq for CancellationHandle {}

impl fmt::Debug for CancellationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.flag {
            Some(flag) => write!(
                f,
                "CancellationHandle({:p}, cancelled: {})",
                Arc::as_ptr(flag),
                flag.load(Ordering::SeqCst)
            ),
            None => write!(f, "CancellationHandle(none)"),
        }
    }
}
