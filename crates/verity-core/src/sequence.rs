//! Ordered sequence equality with bounded diff reporting

use std::fmt;

use crate::errors::{raise, render_items, AssertionFailure, Mismatch, PositionDiff, Result};

/// Maximum number of differing positions listed in a diagnostic
pub const MAX_DIFFS_SHOWN: usize = 10;

const OP: &str = "sequence_equal";

/// Assert that two sequences hold equal elements in the same order
///
/// Equal sequences are confirmed with one whole-slice comparison. Only on
/// failure are positions scanned: a length mismatch reports both lengths,
/// otherwise the first [`MAX_DIFFS_SHOWN`] differing positions are listed
/// alongside the total number of differences.
///
/// # Errors
/// * `LengthMismatch` - the sequences have different lengths
/// * `ElementMismatch` - at least one position differs
///
/// # Example
///
/// ```
/// use verity_core::sequence::sequence_equal;
///
/// let failure = sequence_equal(&[1, 2, 3], &[1, 2, 4]).unwrap_err();
/// assert_eq!(failure.total_differences(), Some(1));
/// assert!(failure.diagnostic().contains("Position 2: Expected: 3, Actual: 4"));
/// ```
pub fn sequence_equal<T>(expected: &[T], actual: &[T]) -> Result<()>
where
    T: PartialEq + fmt::Debug,
{
    if expected == actual {
        return Ok(());
    }
    Err(describe(expected, actual, |e, a| e == a))
}

/// Assert sequence equality under a caller-supplied element comparer
///
/// # Errors
/// Same as [`sequence_equal`].
pub fn sequence_equal_by<T, F>(expected: &[T], actual: &[T], eq: F) -> Result<()>
where
    T: fmt::Debug,
    F: Fn(&T, &T) -> bool,
{
    if expected.len() == actual.len() && expected.iter().zip(actual).all(|(e, a)| eq(e, a)) {
        return Ok(());
    }
    Err(describe(expected, actual, eq))
}

fn describe<T, F>(expected: &[T], actual: &[T], eq: F) -> AssertionFailure
where
    T: fmt::Debug,
    F: Fn(&T, &T) -> bool,
{
    if expected.len() != actual.len() {
        return raise(
            OP,
            Mismatch::Length {
                expected: expected.len(),
                actual: actual.len(),
            },
        );
    }

    let mut shown = Vec::new();
    let mut total = 0;
    for (index, (e, a)) in expected.iter().zip(actual).enumerate() {
        if eq(e, a) {
            continue;
        }
        total += 1;
        if shown.len() < MAX_DIFFS_SHOWN {
            shown.push(PositionDiff {
                index,
                expected: format!("{:?}", e),
                actual: format!("{:?}", a),
            });
        }
    }

    raise(
        OP,
        Mismatch::Elements {
            len: expected.len(),
            total,
            shown,
            expected: render_items(expected),
            actual: render_items(actual),
        },
    )
}
