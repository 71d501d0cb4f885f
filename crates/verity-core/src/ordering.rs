//! Scalar ordering assertions
//!
//! Absent values are modelled as `None`, which orders below every `Some`.
//! The strict relations fail for `None` against `None`; the non-strict ones
//! pass. Both rules fall out of `Option`'s own `PartialOrd`, so each check is
//! a single comparison of the two options. Incomparable values (a NaN on
//! either side) fail every relation.

use std::fmt;

use crate::errors::{raise, Mismatch, Result};

/// Ordering relation checked by an assertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    GreaterThan,
    LessThan,
    LessOrEqual,
    GreaterOrEqual,
}

impl Relation {
    /// Whether `actual` stands in this relation to `bound`
    pub fn holds<T: PartialOrd>(self, actual: &Option<T>, bound: &Option<T>) -> bool {
        match self {
            Relation::GreaterThan => actual > bound,
            Relation::LessThan => actual < bound,
            Relation::LessOrEqual => actual <= bound,
            Relation::GreaterOrEqual => actual >= bound,
        }
    }

    fn op(self) -> &'static str {
        match self {
            Relation::GreaterThan => "greater_than",
            Relation::LessThan => "less_than",
            Relation::LessOrEqual => "less_or_equal",
            Relation::GreaterOrEqual => "greater_or_equal",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Relation::GreaterThan => "greater than",
            Relation::LessThan => "less than",
            Relation::LessOrEqual => "less than or equal to",
            Relation::GreaterOrEqual => "greater than or equal to",
        };
        f.write_str(text)
    }
}

/// Render an optional value, `<null>` when absent
pub fn render_option<T: fmt::Debug>(value: &Option<T>) -> String {
    match value {
        Some(value) => format!("{:?}", value),
        None => "<null>".to_string(),
    }
}

/// Assert `actual > bound`
///
/// # Errors
/// `OrderingViolation` when the relation does not hold. `note` is appended
/// verbatim to the diagnostic.
///
/// # Example
///
/// ```
/// use verity_core::ordering::greater_than;
///
/// assert!(greater_than(Some(5), Some(3), None).is_ok());
/// assert!(greater_than(Some(5), None, None).is_ok());
/// assert!(greater_than::<i32>(None, None, None).is_err());
/// ```
pub fn greater_than<T>(actual: Option<T>, bound: Option<T>, note: Option<&str>) -> Result<()>
where
    T: PartialOrd + fmt::Debug,
{
    check(Relation::GreaterThan, actual, bound, note)
}

/// Assert `actual < bound`
///
/// # Errors
/// `OrderingViolation` when the relation does not hold.
pub fn less_than<T>(actual: Option<T>, bound: Option<T>, note: Option<&str>) -> Result<()>
where
    T: PartialOrd + fmt::Debug,
{
    check(Relation::LessThan, actual, bound, note)
}

/// Assert `actual <= bound`
///
/// # Errors
/// `OrderingViolation` when the relation does not hold.
pub fn less_or_equal<T>(actual: Option<T>, bound: Option<T>, note: Option<&str>) -> Result<()>
where
    T: PartialOrd + fmt::Debug,
{
    check(Relation::LessOrEqual, actual, bound, note)
}

/// Assert `actual >= bound`
///
/// # Errors
/// `OrderingViolation` when the relation does not hold.
pub fn greater_or_equal<T>(actual: Option<T>, bound: Option<T>, note: Option<&str>) -> Result<()>
where
    T: PartialOrd + fmt::Debug,
{
    check(Relation::GreaterOrEqual, actual, bound, note)
}

fn check<T>(relation: Relation, actual: Option<T>, bound: Option<T>, note: Option<&str>) -> Result<()>
where
    T: PartialOrd + fmt::Debug,
{
    if relation.holds(&actual, &bound) {
        return Ok(());
    }

    let failure = raise(
        relation.op(),
        Mismatch::Ordering {
            actual: render_option(&actual),
            relation,
            bound: render_option(&bound),
        },
    );
    Err(match note {
        Some(note) => failure.with_annotation(note),
        None => failure,
    })
}
