use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::ordering::Relation;

/// Result type alias using AssertionFailure
pub type Result<T> = std::result::Result<T, AssertionFailure>;

// ========== Failure Facility ==========

/// Canonical failure kind taxonomy
///
/// Every assertion failure is classified by one of these kinds. Each kind maps
/// to a stable code that CI reporting and tests can match on without parsing
/// the rendered diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FailureKind {
    // Ordering
    OrderingViolation,

    // Floating point
    ToleranceExceeded,

    // Sequences
    LengthMismatch,
    ElementMismatch,

    // Collections
    CountMismatch,
    MissingElement,
    InsufficientMultiplicity,

    // Failure shape
    /// The operation returned a value instead of failing
    NothingRaised,
    WrongKind,
    MessageMismatch,
    ParamNameMismatch,
    CancellationMismatch,

    // Strings
    TextMismatch,

    // Usage
    /// The assertion itself was called with an argument it cannot accept
    InvalidArgument,
}

impl FailureKind {
    /// Get the stable failure code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::OrderingViolation => "ERR_ORDERING_VIOLATION",
            FailureKind::ToleranceExceeded => "ERR_TOLERANCE_EXCEEDED",
            FailureKind::LengthMismatch => "ERR_LENGTH_MISMATCH",
            FailureKind::ElementMismatch => "ERR_ELEMENT_MISMATCH",
            FailureKind::CountMismatch => "ERR_COUNT_MISMATCH",
            FailureKind::MissingElement => "ERR_MISSING_ELEMENT",
            FailureKind::InsufficientMultiplicity => "ERR_INSUFFICIENT_MULTIPLICITY",
            FailureKind::NothingRaised => "ERR_NOTHING_RAISED",
            FailureKind::WrongKind => "ERR_WRONG_KIND",
            FailureKind::MessageMismatch => "ERR_MESSAGE_MISMATCH",
            FailureKind::ParamNameMismatch => "ERR_PARAM_NAME_MISMATCH",
            FailureKind::CancellationMismatch => "ERR_CANCELLATION_MISMATCH",
            FailureKind::TextMismatch => "ERR_TEXT_MISMATCH",
            FailureKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
        }
    }
}

/// One differing position in a sequence comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionDiff {
    pub index: usize,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for PositionDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {}: Expected: {}, Actual: {}",
            self.index, self.expected, self.actual
        )
    }
}

/// Canonical structured assertion failure
///
/// Carries the classification (kind and code), the operation that failed,
/// the rendered expected/actual values and, for sequence comparisons, the
/// bounded list of differing positions together with the total count.
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionFailure {
    kind: FailureKind,
    op: Option<String>,
    message: String,
    expected: Option<String>,
    actual: Option<String>,
    differences: Vec<PositionDiff>,
    total_differences: Option<usize>,
    annotation: Option<String>,
}

impl AssertionFailure {
    /// Create a new failure with the specified kind
    pub fn new(kind: FailureKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
            expected: None,
            actual: None,
            differences: Vec::new(),
            total_differences: None,
            annotation: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add rendered expected value
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Add rendered actual value
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    /// Add positional differences and the total number of differing positions
    pub fn with_differences(mut self, shown: Vec<PositionDiff>, total: usize) -> Self {
        self.differences = shown;
        self.total_differences = Some(total);
        self
    }

    /// Append a caller-supplied annotation to the diagnostic
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Get the failure kind
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Get the stable failure code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the headline message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the rendered expected value, if any
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// Get the rendered actual value, if any
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// Get the positional differences shown in the diagnostic
    pub fn differences(&self) -> &[PositionDiff] {
        &self.differences
    }

    /// Get the total number of differing positions, if this was a sequence comparison
    pub fn total_differences(&self) -> Option<usize> {
        self.total_differences
    }

    /// Get the caller annotation, if any
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// Render the human-readable diagnostic without the code prefix
    pub fn diagnostic(&self) -> String {
        let mut out = self.message.clone();
        if let Some(annotation) = &self.annotation {
            out.push(' ');
            out.push_str(annotation);
        }
        for diff in &self.differences {
            out.push('\n');
            out.push_str(&diff.to_string());
        }
        out
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " {}:", op)?;
        }
        write!(f, " {}", self.diagnostic())
    }
}

impl std::error::Error for AssertionFailure {}

// ========== End Failure Facility ==========

/// Detailed mismatch taxonomy produced by the individual checks
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Mismatch {
    // ===== Ordering =====
    /// An ordering relation did not hold
    #[error("Expected: {actual} to be {relation} {bound}.")]
    Ordering {
        actual: String,
        relation: Relation,
        bound: String,
    },

    // ===== Floating point =====
    /// Floating values differ by more than the allowed variance
    #[error("Values differ by more than {variance}\nExpected: {expected}\nActual:   {actual}")]
    Tolerance {
        expected: String,
        actual: String,
        variance: String,
    },

    // ===== Sequences =====
    /// Sequences have different lengths
    #[error("Expected: sequence of length {expected}\nActual: sequence of length {actual}")]
    Length { expected: usize, actual: usize },

    /// Sequences of equal length differ at one or more positions
    #[error("Sequences of length {len} differ at {total} position(s)\nExpected: {expected}\nActual:   {actual}")]
    Elements {
        len: usize,
        total: usize,
        shown: Vec<PositionDiff>,
        expected: String,
        actual: String,
    },

    // ===== Collections =====
    /// Collections hold a different number of elements
    #[error("Expected count: {expected}, Actual count: {actual}")]
    Count { expected: usize, actual: usize },

    /// An expected element has no equivalent in actual
    #[error("Expected: {item} not found in actual {actual}")]
    Missing { item: String, actual: String },

    /// Expected holds more copies of an element than actual
    #[error("Found more occurrences of {item} in expected than in actual ({actual_copies} in actual)")]
    Multiplicity { item: String, actual_copies: usize },

    // ===== Failure shape =====
    /// The operation completed without failing
    #[error("Expected {expected} to be raised, but no failure was raised. Result: {result}")]
    NothingRaised { expected: String, result: String },

    /// The operation failed with a different kind
    #[error("Expected {expected} to be raised, but {actual} was raised: {message}")]
    WrongKind {
        expected: String,
        actual: String,
        message: String,
    },

    /// The failure message differs from the expected message
    #[error("Expected message: {expected:?}, Actual message: {actual:?}")]
    Message { expected: String, actual: String },

    /// The failure message does not contain the expected fragment
    #[error("Expected message containing: {fragment:?}, Actual message: {actual:?}")]
    MessageFragment { fragment: String, actual: String },

    /// The failure names a different parameter
    #[error("Expected parameter name: {expected}, Actual parameter name: {actual}")]
    ParamName { expected: String, actual: String },

    /// A cancellation failure carries a different handle than supplied
    #[error("Expected cancellation carrying {expected}, Actual: {actual}")]
    Cancellation { expected: String, actual: String },

    // ===== Strings =====
    /// Strings differ under the ambient locale's case folding
    #[error("Expected: {expected:?}, Actual: {actual:?} (ignoring case, locale {locale})")]
    Text {
        expected: String,
        actual: String,
        locale: String,
    },

    // ===== Usage =====
    /// The assertion was called with an argument it cannot accept
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },
}

/// Conversion from Mismatch to AssertionFailure
impl From<Mismatch> for AssertionFailure {
    fn from(mismatch: Mismatch) -> Self {
        let message = mismatch.to_string();
        match mismatch {
            Mismatch::Ordering { actual, bound, .. } => {
                AssertionFailure::new(FailureKind::OrderingViolation)
                    .with_expected(bound)
                    .with_actual(actual)
            }
            Mismatch::Tolerance {
                expected, actual, ..
            } => AssertionFailure::new(FailureKind::ToleranceExceeded)
                .with_expected(expected)
                .with_actual(actual),
            Mismatch::Length { expected, actual } => {
                AssertionFailure::new(FailureKind::LengthMismatch)
                    .with_expected(expected.to_string())
                    .with_actual(actual.to_string())
            }
            Mismatch::Elements {
                total,
                shown,
                expected,
                actual,
                ..
            } => AssertionFailure::new(FailureKind::ElementMismatch)
                .with_expected(expected)
                .with_actual(actual)
                .with_differences(shown, total),
            Mismatch::Count { expected, actual } => AssertionFailure::new(FailureKind::CountMismatch)
                .with_expected(expected.to_string())
                .with_actual(actual.to_string()),
            Mismatch::Missing { item, actual } => AssertionFailure::new(FailureKind::MissingElement)
                .with_expected(item)
                .with_actual(actual),
            Mismatch::Multiplicity {
                item,
                actual_copies,
            } => AssertionFailure::new(FailureKind::InsufficientMultiplicity)
                .with_expected(item)
                .with_actual(actual_copies.to_string()),
            Mismatch::NothingRaised { expected, result } => {
                AssertionFailure::new(FailureKind::NothingRaised)
                    .with_expected(expected)
                    .with_actual(result)
            }
            Mismatch::WrongKind {
                expected, actual, ..
            } => AssertionFailure::new(FailureKind::WrongKind)
                .with_expected(expected)
                .with_actual(actual),
            Mismatch::Message { expected, actual } => {
                AssertionFailure::new(FailureKind::MessageMismatch)
                    .with_expected(expected)
                    .with_actual(actual)
            }
            Mismatch::MessageFragment { fragment, actual } => {
                AssertionFailure::new(FailureKind::MessageMismatch)
                    .with_expected(fragment)
                    .with_actual(actual)
            }
            Mismatch::ParamName { expected, actual } => {
                AssertionFailure::new(FailureKind::ParamNameMismatch)
                    .with_expected(expected)
                    .with_actual(actual)
            }
            Mismatch::Cancellation { expected, actual } => {
                AssertionFailure::new(FailureKind::CancellationMismatch)
                    .with_expected(expected)
                    .with_actual(actual)
            }
            Mismatch::Text {
                expected, actual, ..
            } => AssertionFailure::new(FailureKind::TextMismatch)
                .with_expected(expected)
                .with_actual(actual),
            Mismatch::InvalidArgument { name, .. } => {
                AssertionFailure::new(FailureKind::InvalidArgument).with_expected(name)
            }
        }
        .with_message(message)
    }
}

/// Build the failure for a check and record it at debug level
///
/// Checks are lower-layer operations: they leave start/end logging to the
/// runner boundary and only emit a debug event carrying the failure code.
pub(crate) fn raise(op: &'static str, mismatch: Mismatch) -> AssertionFailure {
    let failure = AssertionFailure::from(mismatch).with_op(op);
    tracing::debug!(op, err.code = failure.code(), "assertion failed");
    failure
}

/// Rendered width after which [`render_items`] elides the remaining items
pub const RENDER_LIMIT: usize = 64;

/// Render a slice as `[a, b, c]`, eliding items past [`RENDER_LIMIT`] with `...`
///
/// The first item is always shown.
pub fn render_items<T: fmt::Debug>(items: &[T]) -> String {
    let mut out = String::from("[");
    for (index, item) in items.iter().enumerate() {
        let rendered = format!("{:?}", item);
        if index > 0 {
            if out.len() + 2 + rendered.len() > RENDER_LIMIT {
                out.push_str(", ...");
                break;
            }
            out.push_str(", ");
        }
        out.push_str(&rendered);
    }
    out.push(']');
    out
}

/// Configuration errors (environment-driven settings)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Runtime variant setting is not recognised
    #[error("Unknown runtime variant '{value}' (expected 'legacy' or 'current')")]
    UnknownVariant { value: String },

    /// Locale setting is not a valid culture name
    #[error("Invalid locale name '{value}'")]
    InvalidLocale { value: String },
}
