//! Floating-point equality within a variance
//!
//! NaN only equals NaN, infinities only equal the same infinity, and every
//! other pair is equal when `|expected - actual| <= variance`. Signed zeros
//! compare equal (IEEE) but are rendered distinctly in diagnostics.

use std::fmt;

use crate::errors::{raise, Mismatch, Result};

/// Width each rendered value is aligned to in diagnostics
pub const RENDER_WIDTH: usize = 10;

const OP: &str = "equal_with_variance";

/// Floating value types accepted by [`equal_with_variance`]
pub trait FloatValue: Copy + fmt::Debug {
    /// Significant digits needed to render the type without loss
    const SIGNIFICANT_DIGITS: usize;

    fn to_f64(self) -> f64;
}

impl FloatValue for f64 {
    const SIGNIFICANT_DIGITS: usize = 17;

    fn to_f64(self) -> f64 {
        self
    }
}

impl FloatValue for f32 {
    const SIGNIFICANT_DIGITS: usize = 9;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

/// Assert that `actual` is within `variance` of `expected`
///
/// # Errors
/// * `InvalidArgument` - `variance` is negative or NaN
/// * `ToleranceExceeded` - the values are not equal within `variance`
///
/// # Example
///
/// ```
/// use verity_core::float::equal_with_variance;
///
/// assert!(equal_with_variance(1.0_f64, 1.05, 0.1).is_ok());
/// assert!(equal_with_variance(f64::NAN, f64::NAN, 0.0).is_ok());
/// assert!(equal_with_variance(f64::INFINITY, f64::NEG_INFINITY, 1e300).is_err());
/// ```
pub fn equal_with_variance<F: FloatValue>(expected: F, actual: F, variance: F) -> Result<()> {
    let (e, a, v) = (expected.to_f64(), actual.to_f64(), variance.to_f64());

    if v.is_nan() || v < 0.0 {
        return Err(raise(
            OP,
            Mismatch::InvalidArgument {
                name: "variance".to_string(),
                reason: format!("must be non-negative, got {}", render(variance)),
            },
        ));
    }

    let equal = if e.is_nan() || a.is_nan() {
        e.is_nan() && a.is_nan()
    } else if e.is_infinite() || a.is_infinite() {
        e == a
    } else {
        (a - e).abs() <= v
    };

    if equal {
        return Ok(());
    }

    Err(raise(
        OP,
        Mismatch::Tolerance {
            expected: render_padded(expected),
            actual: render_padded(actual),
            variance: render(variance),
        },
    ))
}

/// Render a floating value aligned to [`RENDER_WIDTH`]
pub fn render_padded<F: FloatValue>(value: F) -> String {
    format!("{:>width$}", render(value), width = RENDER_WIDTH)
}

/// Render a floating value for diagnostics
///
/// `NaN`, `+∞`, `-∞`, `+0.0` and `-0.0` are spelled out; everything else
/// uses the type's full significant-digit general format.
pub fn render<F: FloatValue>(value: F) -> String {
    let v = value.to_f64();
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+\u{221E}".to_string()
    } else if v == f64::NEG_INFINITY {
        "-\u{221E}".to_string()
    } else if v == 0.0 {
        let zero = if v.is_sign_negative() { "-0.0" } else { "+0.0" };
        zero.to_string()
    } else {
        general(v, F::SIGNIFICANT_DIGITS)
    }
}

/// General numeric format with `digits` significant digits
///
/// Positional notation for decimal exponents in `-5..digits`, scientific
/// (`1.5E+20`) otherwise; trailing fractional zeros are trimmed.
fn general(value: f64, digits: usize) -> String {
    let scientific = format!("{:.*e}", digits.saturating_sub(1), value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let digits = digits as i32;
    if exponent < -5 || exponent >= digits {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}E{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
