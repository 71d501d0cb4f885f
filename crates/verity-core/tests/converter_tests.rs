#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{icon_bytes, Icon, IconConverter};
use verity_core::converter::{
    ConversionContext, ConversionError, ConversionErrorKind, Converter, TypeTag, Value,
};
use verity_core::locale::with_locale;
use verity_core::throws::{throws, throws_argument, throws_with_message};
use verity_core::FailureKind;
use verity_core_types::Locale;

fn context() -> ConversionContext {
    ConversionContext {
        property: Some("Icon".to_string()),
    }
}

#[test]
fn test_capabilities() {
    let converter = IconConverter::default();
    let ctx = context();

    assert!(converter.can_convert_from(Some(&ctx), TypeTag::Bytes));
    assert!(!converter.can_convert_from(Some(&ctx), TypeTag::Text));
    assert!(!converter.can_convert_from(None, TypeTag::Int));
    assert!(converter.can_convert_to(None, TypeTag::Text));
    assert!(!converter.can_convert_to(None, TypeTag::Named("Size")));
}

#[test]
fn test_convert_from_bytes() {
    let converter = IconConverter::default();
    let icon = converter
        .convert_from(None, None, &Value::Bytes(icon_bytes()))
        .unwrap();
    assert_eq!(icon.bytes, icon_bytes());
}

#[test]
fn test_convert_from_unsupported_sources() {
    let converter = IconConverter::default();

    for value in [
        Value::Null,
        Value::Bool(true),
        Value::Int(1),
        Value::Text("icon.ico".to_string()),
    ] {
        let err = throws(ConversionErrorKind::Unsupported, || {
            converter.convert_from(Some(&context()), None, &value)
        })
        .unwrap();
        assert_eq!(
            err,
            ConversionError::UnsupportedSource {
                converter: "IconConverter",
                from: value.type_tag(),
            }
        );
    }
}

#[test]
fn test_convert_to_unsupported_destination() {
    let converter = IconConverter::default();
    let icon = Icon {
        bytes: icon_bytes(),
    };

    throws_with_message(
        ConversionErrorKind::Unsupported,
        "IconConverter cannot convert to Size",
        || converter.convert_to(None, None, Some(&icon), TypeTag::Named("Size")),
    )
    .unwrap();

    // A null source does not make an unsupported destination acceptable.
    throws(ConversionErrorKind::Unsupported, || {
        converter.convert_to(None, None, None, TypeTag::Int)
    })
    .unwrap();
}

#[test]
fn test_convert_to_supported_destinations() {
    let converter = IconConverter::default();

    assert_eq!(
        converter.convert_to(None, None, None, TypeTag::Text).unwrap(),
        Value::Text("(none)".to_string())
    );
    assert_eq!(
        converter.convert_to(None, None, None, TypeTag::Bytes).unwrap(),
        Value::Bytes(Vec::new())
    );
}

#[test]
fn test_malformed_bytes_blame_value() {
    let converter = IconConverter::default();
    throws_argument(ConversionErrorKind::Malformed, Some("value"), || {
        converter.convert_from(None, None, &Value::Bytes(vec![0x89, b'P', b'N', b'G']))
    })
    .unwrap();
}

#[test]
fn test_successful_conversion_is_reported_as_nothing_raised() {
    let converter = IconConverter::default();
    let failure = throws(ConversionErrorKind::Unsupported, || {
        converter.convert_to(None, None, None, TypeTag::Text)
    })
    .unwrap_err();

    assert_eq!(failure.kind(), FailureKind::NothingRaised);
    assert!(failure.diagnostic().ends_with("Result: Text(\"(none)\")"));
}

#[test]
fn test_absent_locale_uses_ambient() {
    let converter = IconConverter::default();
    let german = Locale::parse("de-DE").unwrap();

    with_locale(german.clone(), || {
        let _ = converter.convert_from(None, None, &Value::Null);
    });
    assert_eq!(converter.last_locale(), Some(german));

    let french = Locale::parse("fr-FR").unwrap();
    with_locale(Locale::invariant(), || {
        let _ = converter.convert_to(None, Some(&french), None, TypeTag::Text);
    });
    assert_eq!(converter.last_locale(), Some(french));
}
