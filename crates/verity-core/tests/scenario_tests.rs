#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{read_at, StreamErrorKind};
use verity_core::collection::{collection_equal, collection_equal_by};
use verity_core::float::{equal_with_variance, render_padded};
use verity_core::locale::with_locale;
use verity_core::ordering::{greater_or_equal, greater_than, less_or_equal, less_than};
use verity_core::sequence::sequence_equal;
use verity_core::shape::FailureShape;
use verity_core::strings::equal_ignoring_case;
use verity_core::throws::{throws, throws_any, throws_containing, throws_for_variant};
use verity_core::{Expectation, FailureKind, RuntimeVariant, VariantExpectation};
use verity_core_types::Locale;

#[test]
fn test_sequence_single_difference() {
    let failure = sequence_equal(&[1, 2, 3], &[1, 2, 4]).unwrap_err();

    assert_eq!(failure.kind(), FailureKind::ElementMismatch);
    assert_eq!(failure.total_differences(), Some(1));
    assert_eq!(failure.differences().len(), 1);
    assert_eq!(failure.expected(), Some("[1, 2, 3]"));
    assert_eq!(failure.actual(), Some("[1, 2, 4]"));
    assert_eq!(
        failure.differences()[0].to_string(),
        "Position 2: Expected: 3, Actual: 4"
    );
}

#[test]
fn test_sequence_length_mismatch_has_no_positions() {
    let failure = sequence_equal(&[1, 2, 3], &[1, 2]).unwrap_err();

    assert_eq!(failure.kind(), FailureKind::LengthMismatch);
    assert!(failure.differences().is_empty());
    assert_eq!(failure.expected(), Some("3"));
    assert_eq!(failure.actual(), Some("2"));
}

#[test]
fn test_multiset_fails_on_first_short_item() {
    let failure = collection_equal(&["a", "a", "b"], &["a", "b", "b"]).unwrap_err();

    assert_eq!(failure.kind(), FailureKind::InsufficientMultiplicity);
    assert_eq!(failure.expected(), Some("\"a\""));
    assert_eq!(
        failure.message(),
        "Found more occurrences of \"a\" in expected than in actual (1 in actual)"
    );
}

#[test]
fn test_multiset_with_tolerance_predicate() {
    let expected = [0.1_f64, 0.2, 0.3];
    let actual = [0.30000000000000004_f64, 0.1, 0.2];

    assert!(collection_equal_by(&expected, &actual, |a, b| {
        equal_with_variance(*a, *b, 1e-9).is_ok()
    })
    .is_ok());
}

#[test]
fn test_null_ordering_asymmetry() {
    assert!(greater_than(Some(0), None, None).is_ok());
    assert!(less_than(None, Some(0), None).is_ok());
    assert!(greater_than::<i32>(None, None, None).is_err());
    assert!(less_than::<i32>(None, None, None).is_err());
    assert!(greater_or_equal::<i32>(None, None, None).is_ok());
    assert!(less_or_equal::<i32>(None, None, None).is_ok());
}

#[test]
fn test_ordering_annotation() {
    let failure = greater_than(Some(2), Some(5), Some("(attempts)")).unwrap_err();
    assert_eq!(
        failure.diagnostic(),
        "Expected: 2 to be greater than 5. (attempts)"
    );
}

#[test]
fn test_float_nan_and_infinity() {
    assert!(equal_with_variance(f64::NAN, f64::NAN, 0.0).is_ok());
    assert!(equal_with_variance(f64::NAN, 1.0, f64::MAX).is_err());
    assert!(equal_with_variance(1.0, f64::NAN, f64::MAX).is_err());
    assert!(equal_with_variance(f64::INFINITY, f64::INFINITY, 0.0).is_ok());
    assert!(equal_with_variance(f64::INFINITY, f64::MAX, f64::MAX).is_err());
    assert!(equal_with_variance(0.0_f64, -0.0, 0.0).is_ok());
}

#[test]
fn test_float_diagnostic_alignment() {
    let failure = equal_with_variance(1.5_f64, 2.5, 0.5).unwrap_err();

    assert_eq!(failure.kind(), FailureKind::ToleranceExceeded);
    assert_eq!(failure.expected(), Some("       1.5"));
    assert_eq!(failure.actual(), Some("       2.5"));
    assert_eq!(render_padded(-0.0_f32), "      -0.0");
}

#[test]
fn test_returned_text_is_quoted() {
    let failure =
        throws(StreamErrorKind::Argument, || Ok::<_, common::StreamError>("hello")).unwrap_err();

    assert_eq!(failure.kind(), FailureKind::NothingRaised);
    assert!(failure.diagnostic().ends_with("Result: \"hello\""));

    let failure = throws(StreamErrorKind::Argument, || {
        Ok::<_, common::StreamError>(String::from("hello"))
    })
    .unwrap_err();
    assert!(failure.diagnostic().ends_with("Result: \"hello\""));
}

#[test]
fn test_returned_option_renders_payload_or_null() {
    let failure = throws(StreamErrorKind::Argument, || {
        Ok::<Option<String>, common::StreamError>(None)
    })
    .unwrap_err();
    assert!(failure.diagnostic().ends_with("Result: (null)"));

    let failure = throws(StreamErrorKind::Argument, || {
        Ok::<_, common::StreamError>(Some("hello".to_string()))
    })
    .unwrap_err();
    assert!(failure.diagnostic().ends_with("Result: \"hello\""));
}

#[test]
fn test_returned_unit_is_null() {
    let failure = throws(StreamErrorKind::Argument, || Ok::<(), common::StreamError>(())).unwrap_err();
    assert!(failure.diagnostic().ends_with("Result: (null)"));
}

#[test]
fn test_stream_argument_checks() {
    let buffer = [1_u8, 2, 3, 4];

    let err = throws(StreamErrorKind::ArgumentNull, || read_at(None, 0, 1)).unwrap();
    assert_eq!(err.param_name(), Some("buffer"));

    throws_containing(StreamErrorKind::OutOfRange, "Non-negative", || {
        read_at(Some(&buffer[..]), -1, 1)
    })
    .unwrap();

    throws_any(
        &[StreamErrorKind::Argument, StreamErrorKind::OutOfRange],
        || read_at(Some(&buffer[..]), 3, 2),
    )
    .unwrap();

    let failure = throws(StreamErrorKind::OutOfRange, || read_at(Some(&buffer[..]), 3, 2)).unwrap_err();
    assert_eq!(failure.kind(), FailureKind::WrongKind);
    assert_eq!(failure.actual(), Some("Argument"));
}

#[test]
fn test_variant_expectations() {
    let expectations = VariantExpectation::new(
        Expectation::new(StreamErrorKind::ArgumentNull).with_param_name("buffer"),
        Expectation::new(StreamErrorKind::Argument).with_param_name("count"),
    );
    let buffer = [0_u8; 2];

    throws_for_variant(RuntimeVariant::Legacy, &expectations, || read_at(None, 0, 1)).unwrap();
    throws_for_variant(RuntimeVariant::Current, &expectations, || {
        read_at(Some(&buffer[..]), 0, 3)
    })
    .unwrap();

    let failure = throws_for_variant(RuntimeVariant::Current, &expectations, || {
        read_at(None, 0, 1)
    })
    .unwrap_err();
    assert_eq!(failure.kind(), FailureKind::WrongKind);
}

#[test]
fn test_turkish_case_insensitive_comparison() {
    let turkish = Locale::parse("tr-TR").unwrap();
    with_locale(turkish, || {
        assert!(equal_ignoring_case("DİYARBAKIR", "diyarbakır").is_ok());
        assert!(equal_ignoring_case("DIYARBAKIR", "diyarbakir").is_err());
    });
    with_locale(Locale::invariant(), || {
        assert!(equal_ignoring_case("DIYARBAKIR", "diyarbakir").is_ok());
    });
}
