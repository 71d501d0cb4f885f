//! Failure-shape assertions
//!
//! Each assertion runs an operation and expects it to fail. On the expected
//! failure the error is handed back so the caller can inspect it further.
//! When the operation succeeds instead, the diagnostic includes what it
//! returned (`Result: ...`) so the unexpected value is visible.

use std::any::type_name;
use std::fmt;
use std::future::Future;

use crate::errors::{raise, Mismatch, Result};
use crate::shape::{CancellationHandle, FailureShape};
use crate::variant::{RuntimeVariant, VariantExpectation};

const CANCELLATION: &str = "cancellation";
const NULL: &str = "(null)";
const OPTION_TYPE: &str = "core::option::Option<";

/// Assert that `action` fails with exactly `kind`
///
/// # Errors
/// * `NothingRaised` - the action returned a value
/// * `WrongKind` - the action failed with another kind
///
/// # Example
///
/// ```
/// use std::fmt;
/// use verity_core::shape::FailureShape;
/// use verity_core::throws::throws;
///
/// #[derive(Debug)]
/// struct Empty;
///
/// impl fmt::Display for Empty {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("queue is empty")
///     }
/// }
///
/// impl FailureShape for Empty {
///     type Kind = &'static str;
///     fn kind(&self) -> Self::Kind {
///         "Empty"
///     }
/// }
///
/// let err = throws("Empty", || Err::<u32, _>(Empty)).unwrap();
/// assert_eq!(err.to_string(), "queue is empty");
///
/// let failure = throws("Empty", || Ok::<_, Empty>(7_u32)).unwrap_err();
/// assert!(failure.diagnostic().ends_with("Result: 7"));
/// ```
pub fn throws<T, E, F>(kind: E::Kind, action: F) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
    F: FnOnce() -> std::result::Result<T, E>,
{
    expect_raised("throws", &[kind], action())
}

/// Assert that `action` fails with any one of `kinds`
///
/// # Errors
/// Same as [`throws`].
pub fn throws_any<T, E, F>(kinds: &[E::Kind], action: F) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
    F: FnOnce() -> std::result::Result<T, E>,
{
    expect_raised("throws_any", kinds, action())
}

/// Assert that `action` fails with exactly `kind` and message `message`
///
/// # Errors
/// Same as [`throws`], plus `MessageMismatch` when the message differs.
pub fn throws_with_message<T, E, F>(kind: E::Kind, message: &str, action: F) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
    F: FnOnce() -> std::result::Result<T, E>,
{
    const OP: &str = "throws_with_message";
    let error = expect_raised(OP, &[kind], action())?;
    check_message(OP, message, &error)?;
    Ok(error)
}

/// Assert that `action` fails with `kind` and a message containing `fragment`
///
/// # Errors
/// Same as [`throws`], plus `MessageMismatch` when the fragment is absent.
pub fn throws_containing<T, E, F>(kind: E::Kind, fragment: &str, action: F) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
    F: FnOnce() -> std::result::Result<T, E>,
{
    const OP: &str = "throws_containing";
    let error = expect_raised(OP, &[kind], action())?;
    check_fragment(OP, fragment, &error)?;
    Ok(error)
}

/// Assert that `action` fails with `kind`, blaming parameter `param_name`
///
/// `param_name: None` skips the parameter check.
///
/// # Errors
/// Same as [`throws`], plus `ParamNameMismatch`.
pub fn throws_argument<T, E, F>(kind: E::Kind, param_name: Option<&str>, action: F) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
    F: FnOnce() -> std::result::Result<T, E>,
{
    const OP: &str = "throws_argument";
    let error = expect_raised(OP, &[kind], action())?;
    check_param_name(OP, param_name, &error)?;
    Ok(error)
}

/// Assert the failure expected under the active [`RuntimeVariant`]
///
/// The variant is resolved from configuration at call time.
///
/// # Errors
/// Same as [`throws_argument`].
pub fn throws_variant<T, E, F>(expectations: &VariantExpectation<E::Kind>, action: F) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
    F: FnOnce() -> std::result::Result<T, E>,
{
    throws_for_variant(RuntimeVariant::current(), expectations, action)
}

/// Assert the failure expected under an explicitly chosen variant
///
/// # Errors
/// Same as [`throws_argument`].
pub fn throws_for_variant<T, E, F>(
    variant: RuntimeVariant,
    expectations: &VariantExpectation<E::Kind>,
    action: F,
) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
    F: FnOnce() -> std::result::Result<T, E>,
{
    const OP: &str = "throws_variant";
    let expectation = expectations.select(variant);
    let error = expect_raised(OP, &[expectation.kind], action())?;
    check_param_name(OP, expectation.param_name.as_deref(), &error)?;
    Ok(error)
}

/// Assert that `action` reports cancellation
///
/// When `handle` can be cancelled, the failure must carry that same handle.
///
/// # Errors
/// * `NothingRaised` / `WrongKind` - no cancellation was reported
/// * `CancellationMismatch` - the failure carries another handle (or none)
pub fn throws_cancelled<T, E, F>(handle: &CancellationHandle, action: F) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
    F: FnOnce() -> std::result::Result<T, E>,
{
    expect_cancelled("throws_cancelled", handle, action())
}

/// Await `operation` and assert it fails with exactly `kind`
///
/// # Errors
/// Same as [`throws`].
pub async fn throws_async<T, E, Fut>(kind: E::Kind, operation: Fut) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    expect_raised("throws_async", &[kind], operation.await)
}

/// Await `operation` and assert it reports cancellation by `handle`
///
/// # Errors
/// Same as [`throws_cancelled`].
pub async fn throws_cancelled_async<T, E, Fut>(
    handle: &CancellationHandle,
    operation: Fut,
) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    expect_cancelled("throws_cancelled_async", handle, operation.await)
}

/// Await `operation` and assert it fails with any one of `kinds`
///
/// # Errors
/// Same as [`throws_any`].
pub async fn throws_any_async<T, E, Fut>(kinds: &[E::Kind], operation: Fut) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    expect_raised("throws_any_async", kinds, operation.await)
}

/// Await `operation` and assert it fails with `kind` and message `message`
///
/// # Errors
/// Same as [`throws_with_message`].
pub async fn throws_with_message_async<T, E, Fut>(
    kind: E::Kind,
    message: &str,
    operation: Fut,
) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    const OP: &str = "throws_with_message_async";
    let error = expect_raised(OP, &[kind], operation.await)?;
    check_message(OP, message, &error)?;
    Ok(error)
}

/// Await `operation` and assert it fails with `kind` and a message containing `fragment`
///
/// # Errors
/// Same as [`throws_containing`].
pub async fn throws_containing_async<T, E, Fut>(
    kind: E::Kind,
    fragment: &str,
    operation: Fut,
) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    const OP: &str = "throws_containing_async";
    let error = expect_raised(OP, &[kind], operation.await)?;
    check_fragment(OP, fragment, &error)?;
    Ok(error)
}

/// Await `operation` and assert it fails with `kind`, blaming `param_name`
///
/// # Errors
/// Same as [`throws_argument`].
pub async fn throws_argument_async<T, E, Fut>(
    kind: E::Kind,
    param_name: Option<&str>,
    operation: Fut,
) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    const OP: &str = "throws_argument_async";
    let error = expect_raised(OP, &[kind], operation.await)?;
    check_param_name(OP, param_name, &error)?;
    Ok(error)
}

/// Render a value an operation returned instead of failing
///
/// Text is quoted (with `Debug` escaping), unit and `None` render as
/// `(null)`, `Some(value)` renders as `value`, anything else uses its `Debug`
/// form.
///
/// # Example
///
/// ```
/// use verity_core::throws::render_returned;
///
/// assert_eq!(render_returned(&"hello"), "\"hello\"");
/// assert_eq!(render_returned(&Some(String::from("hello"))), "\"hello\"");
/// assert_eq!(render_returned(&None::<u8>), "(null)");
/// assert_eq!(render_returned(&()), "(null)");
/// ```
pub fn render_returned<T: fmt::Debug>(value: &T) -> String {
    let rendered = format!("{:?}", value);
    let mut shown = rendered.as_str();
    let mut ty = type_name::<T>();

    // Peel `Option` layers; the type name tells a real `Option` apart from a
    // user type whose `Debug` happens to print `None`.
    while let Some(inner) = ty
        .strip_prefix(OPTION_TYPE)
        .and_then(|rest| rest.strip_suffix('>'))
    {
        if shown == "None" {
            return NULL.to_string();
        }
        match shown
            .strip_prefix("Some(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            Some(payload) => {
                shown = payload;
                ty = inner;
            }
            None => break,
        }
    }

    if ty == "()" {
        NULL.to_string()
    } else {
        shown.to_string()
    }
}

fn expect_raised<T, E>(
    op: &'static str,
    kinds: &[E::Kind],
    outcome: std::result::Result<T, E>,
) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
{
    match outcome {
        Err(error) if kinds.contains(&error.kind()) => Ok(error),
        Err(error) => Err(raise(
            op,
            Mismatch::WrongKind {
                expected: render_kinds(kinds),
                actual: format!("{:?}", error.kind()),
                message: error.to_string(),
            },
        )),
        Ok(value) => Err(raise(
            op,
            Mismatch::NothingRaised {
                expected: render_kinds(kinds),
                result: render_returned(&value),
            },
        )),
    }
}

fn expect_cancelled<T, E>(
    op: &'static str,
    handle: &CancellationHandle,
    outcome: std::result::Result<T, E>,
) -> Result<E>
where
    T: fmt::Debug,
    E: FailureShape,
{
    let error = match outcome {
        Err(error) if error.is_cancellation() => error,
        Err(error) => {
            return Err(raise(
                op,
                Mismatch::WrongKind {
                    expected: CANCELLATION.to_string(),
                    actual: format!("{:?}", error.kind()),
                    message: error.to_string(),
                },
            ))
        }
        Ok(value) => {
            return Err(raise(
                op,
                Mismatch::NothingRaised {
                    expected: CANCELLATION.to_string(),
                    result: render_returned(&value),
                },
            ))
        }
    };

    if handle.can_be_cancelled() && error.cancellation() != Some(handle) {
        return Err(raise(
            op,
            Mismatch::Cancellation {
                expected: format!("{:?}", handle),
                actual: error
                    .cancellation()
                    .map_or_else(|| "<null>".to_string(), |h| format!("{:?}", h)),
            },
        ));
    }
    Ok(error)
}

fn check_message<E: FailureShape>(op: &'static str, expected: &str, error: &E) -> Result<()> {
    let actual = error.to_string();
    if actual == expected {
        return Ok(());
    }
    Err(raise(
        op,
        Mismatch::Message {
            expected: expected.to_string(),
            actual,
        },
    ))
}

fn check_fragment<E: FailureShape>(op: &'static str, fragment: &str, error: &E) -> Result<()> {
    let actual = error.to_string();
    if actual.contains(fragment) {
        return Ok(());
    }
    Err(raise(
        op,
        Mismatch::MessageFragment {
            fragment: fragment.to_string(),
            actual,
        },
    ))
}

fn check_param_name<E: FailureShape>(op: &'static str, expected: Option<&str>, error: &E) -> Result<()> {
    let Some(expected) = expected else {
        return Ok(());
    };
    if error.param_name() == Some(expected) {
        return Ok(());
    }
    Err(raise(
        op,
        Mismatch::ParamName {
            expected: expected.to_string(),
            actual: error.param_name().unwrap_or("<null>").to_string(),
        },
    ))
}

fn render_kinds<K: fmt::Debug>(kinds: &[K]) -> String {
    match kinds {
        [kind] => format!("{:?}", kind),
        _ => format!("one of {:?}", kinds),
    }
}
