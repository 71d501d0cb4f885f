//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fmt;

use verity_core::converter::{
    ConversionContext, ConversionError, Converter, TypeTag, Value,
};
use verity_core::locale::resolve_locale;
use verity_core::shape::{CancellationHandle, FailureShape};
use verity_core_types::Locale;

/// Leading bytes of an icon resource
pub const ICON_HEADER: [u8; 4] = [0, 0, 1, 0];

/// Decoded icon: the raw resource bytes
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub bytes: Vec<u8>,
}

/// Converter fake: accepts icon bytes, renders to text or bytes
///
/// Records the locale each conversion resolved so tests can observe
/// ambient-locale fallback.
#[derive(Debug, Default)]
pub struct IconConverter {
    last_locale: std::cell::RefCell<Option<Locale>>,
}

const NAME: &str = "IconConverter";

impl IconConverter {
    pub fn last_locale(&self) -> Option<Locale> {
        self.last_locale.borrow().clone()
    }

    fn remember(&self, locale: Option<&Locale>) {
        *self.last_locale.borrow_mut() = Some(resolve_locale(locale));
    }
}

impl Converter for IconConverter {
    type Target = Icon;

    fn can_convert_from(&self, _context: Option<&ConversionContext>, source: TypeTag) -> bool {
        source == TypeTag::Bytes
    }

    fn can_convert_to(&self, _context: Option<&ConversionContext>, destination: TypeTag) -> bool {
        matches!(destination, TypeTag::Text | TypeTag::Bytes)
    }

    fn convert_from(
        &self,
        _context: Option<&ConversionContext>,
        locale: Option<&Locale>,
        value: &Value,
    ) -> Result<Icon, ConversionError> {
        self.remember(locale);
        match value {
            Value::Bytes(bytes) if bytes.starts_with(&ICON_HEADER) => Ok(Icon {
                bytes: bytes.clone(),
            }),
            Value::Bytes(_) => Err(ConversionError::Malformed {
                converter: NAME,
                param: "value",
                reason: "missing icon header".to_string(),
            }),
            other => Err(ConversionError::UnsupportedSource {
                converter: NAME,
                from: other.type_tag(),
            }),
        }
    }

    fn convert_to(
        &self,
        _context: Option<&ConversionContext>,
        locale: Option<&Locale>,
        value: Option<&Icon>,
        destination: TypeTag,
    ) -> Result<Value, ConversionError> {
        self.remember(locale);
        match (destination, value) {
            (TypeTag::Text, None) => Ok(Value::Text("(none)".to_string())),
            (TypeTag::Text, Some(icon)) => Ok(Value::Text(format!("Icon ({} bytes)", icon.bytes.len()))),
            (TypeTag::Bytes, None) => Ok(Value::Bytes(Vec::new())),
            (TypeTag::Bytes, Some(icon)) => Ok(Value::Bytes(icon.bytes.clone())),
            (to, _) => Err(ConversionError::UnsupportedDestination { converter: NAME, to }),
        }
    }
}

pub fn icon_bytes() -> Vec<u8> {
    let mut bytes = ICON_HEADER.to_vec();
    bytes.extend_from_slice(&[1, 0, 16, 16]);
    bytes
}

/// Failure kinds of the fake stream API below
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamErrorKind {
    Argument,
    ArgumentNull,
    OutOfRange,
    Cancelled,
}

/// Error type standing in for a library under test
#[derive(Debug)]
pub struct StreamError {
    pub kind: StreamErrorKind,
    pub param: Option<&'static str>,
    pub message: String,
    pub token: Option<CancellationHandle>,
}

impl StreamError {
    pub fn argument(kind: StreamErrorKind, param: &'static str, message: &str) -> Self {
        Self {
            kind,
            param: Some(param),
            message: message.to_string(),
            token: None,
        }
    }

    pub fn cancelled(token: Option<CancellationHandle>) -> Self {
        Self {
            kind: StreamErrorKind::Cancelled,
            param: None,
            message: "The operation was canceled.".to_string(),
            token,
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl FailureShape for StreamError {
    type Kind = StreamErrorKind;

    fn kind(&self) -> StreamErrorKind {
        self.kind
    }

    fn param_name(&self) -> Option<&str> {
        self.param
    }

    fn is_cancellation(&self) -> bool {
        self.kind == StreamErrorKind::Cancelled
    }

    fn cancellation(&self) -> Option<&CancellationHandle> {
        self.token.as_ref()
    }
}

/// Read `count` bytes at `offset`, validating arguments the way a stream API does
pub fn read_at(buffer: Option<&[u8]>, offset: i64, count: usize) -> Result<Vec<u8>, StreamError> {
    let buffer = buffer.ok_or_else(|| {
        StreamError::argument(
            StreamErrorKind::ArgumentNull,
            "buffer",
            "Value cannot be null. (Parameter 'buffer')",
        )
    })?;
    let start = usize::try_from(offset).map_err(|_| {
        StreamError::argument(
            StreamErrorKind::OutOfRange,
            "offset",
            "Non-negative number required. (Parameter 'offset')",
        )
    })?;
    let end = start.checked_add(count).filter(|end| *end <= buffer.len()).ok_or_else(|| {
        StreamError::argument(
            StreamErrorKind::Argument,
            "count",
            "Offset and length were out of bounds for the array.",
        )
    })?;
    Ok(buffer[start..end].to_vec())
}
