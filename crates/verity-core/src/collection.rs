//! Order-independent (multiset) collection equality
//!
//! Actual items are grouped into equivalence classes, each with an
//! [`ItemCount`]. Expected items are then consumed in order against those
//! counts, which catches both missing elements and too few copies.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::errors::{raise, render_items, Mismatch, Result};

const OP: &str = "collection_equal";

/// Occurrences of one equivalence class in the actual collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemCount {
    /// Copies present in actual
    pub original: usize,
    /// Copies not yet matched by an expected item
    pub remaining: usize,
}

impl ItemCount {
    fn record(&mut self) {
        self.original += 1;
        self.remaining += 1;
    }
}

/// Assert that two collections hold the same elements with the same
/// multiplicities, in any order
///
/// # Errors
/// * `CountMismatch` - total element counts differ
/// * `MissingElement` - an expected element has no equal in actual
/// * `InsufficientMultiplicity` - actual holds fewer copies of an element
///
/// # Example
///
/// ```
/// use verity_core::collection::collection_equal;
///
/// assert!(collection_equal(&[3, 1, 2], &[1, 2, 3]).is_ok());
/// assert!(collection_equal(&["a", "a", "b"], &["a", "b", "b"]).is_err());
/// ```
pub fn collection_equal<T>(expected: &[T], actual: &[T]) -> Result<()>
where
    T: Eq + Hash + fmt::Debug,
{
    collection_equal_by_key(expected, actual, |item| item)
}

/// Multiset equality where items are equivalent when their keys are equal
///
/// # Errors
/// Same as [`collection_equal`].
pub fn collection_equal_by_key<'a, T, K, F>(expected: &'a [T], actual: &'a [T], key: F) -> Result<()>
where
    T: fmt::Debug,
    K: Eq + Hash,
    F: Fn(&'a T) -> K,
{
    check_counts(expected.len(), actual.len())?;

    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<ItemCount> = Vec::new();
    for item in actual {
        let slot = *slots.entry(key(item)).or_insert_with(|| {
            counts.push(ItemCount::default());
            counts.len() - 1
        });
        counts[slot].record();
    }

    consume(expected, actual, &mut counts, |item| slots.get(&key(item)).copied())
}

/// Multiset equality under an arbitrary equivalence predicate
///
/// The predicate must be an equivalence relation (reflexive, symmetric,
/// transitive). Classes are found by linear search, so this is quadratic in
/// the number of distinct classes; prefer [`collection_equal_by_key`] when a
/// hashable key exists.
///
/// # Errors
/// Same as [`collection_equal`].
pub fn collection_equal_by<T, F>(expected: &[T], actual: &[T], eq: F) -> Result<()>
where
    T: fmt::Debug,
    F: Fn(&T, &T) -> bool,
{
    check_counts(expected.len(), actual.len())?;

    let mut representatives: Vec<&T> = Vec::new();
    let mut counts: Vec<ItemCount> = Vec::new();
    for item in actual {
        match representatives.iter().position(|rep| eq(*rep, item)) {
            Some(slot) => counts[slot].record(),
            None => {
                representatives.push(item);
                let mut count = ItemCount::default();
                count.record();
                counts.push(count);
            }
        }
    }

    consume(expected, actual, &mut counts, |item| {
        representatives.iter().position(|rep| eq(*rep, item))
    })
}

fn check_counts(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(raise(OP, Mismatch::Count { expected, actual }))
    }
}

fn consume<'a, T, S>(
    expected: &'a [T],
    actual: &[T],
    counts: &mut [ItemCount],
    slot_of: S,
) -> Result<()>
where
    T: fmt::Debug,
    S: Fn(&'a T) -> Option<usize>,
{
    for item in expected {
        let Some(slot) = slot_of(item) else {
            return Err(raise(
                OP,
                Mismatch::Missing {
                    item: format!("{:?}", item),
                    actual: render_items(actual),
                },
            ));
        };

        let count = &mut counts[slot];
        if count.remaining == 0 {
            return Err(raise(
                OP,
                Mismatch::Multiplicity {
                    item: format!("{:?}", item),
                    actual_copies: count.original,
                },
            ));
        }
        count.remaining -= 1;
    }
    Ok(())
}
