//! Culture-aware string checks
//!
//! Case folding follows the ambient locale. Turkic cultures (`tr`, `az`)
//! fold dotted and dotless I separately; every other culture uses Unicode
//! lowercase mapping.

use verity_core_types::Locale;

use crate::errors::{raise, Mismatch, Result};
use crate::locale::current_locale;

const TURKIC_LANGUAGES: [&str; 2] = ["tr", "az"];

/// Lowercase `text` using the casing rules of `locale`
pub fn fold_case(text: &str, locale: &Locale) -> String {
    if !TURKIC_LANGUAGES.contains(&locale.language().as_str()) {
        return text.to_lowercase();
    }

    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'I' => folded.push('ı'),
            'İ' => folded.push('i'),
            _ => folded.extend(c.to_lowercase()),
        }
    }
    folded
}

/// Assert that two strings are equal ignoring case under the ambient locale
///
/// # Errors
/// `TextMismatch` when the folded strings differ.
pub fn equal_ignoring_case(expected: &str, actual: &str) -> Result<()> {
    let locale = current_locale();
    if fold_case(expected, &locale) == fold_case(actual, &locale) {
        return Ok(());
    }
    Err(raise(
        "equal_ignoring_case",
        Mismatch::Text {
            expected: expected.to_string(),
            actual: actual.to_string(),
            locale: locale.to_string(),
        },
    ))
}

/// Assert that `haystack` contains `needle` ignoring case under the ambient locale
///
/// # Errors
/// `TextMismatch` when `needle` does not occur.
pub fn contains_ignoring_case(haystack: &str, needle: &str) -> Result<()> {
    let locale = current_locale();
    if fold_case(haystack, &locale).contains(&fold_case(needle, &locale)) {
        return Ok(());
    }
    Err(raise(
        "contains_ignoring_case",
        Mismatch::Text {
            expected: needle.to_string(),
            actual: haystack.to_string(),
            locale: locale.to_string(),
        },
    ))
}
