//! Type-conversion contract for converters under test
//!
//! Converters themselves live with the code under test. This module fixes
//! the contract they expose and the failure they raise for unsupported
//! conversions, so negative-path tests can be written with
//! [`throws`](crate::throws::throws) against [`ConversionErrorKind`].

use std::fmt;

use thiserror::Error;
use verity_core_types::Locale;

use crate::shape::FailureShape;

/// Type descriptor for conversion sources and destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Null,
    Bool,
    Int,
    Text,
    Bytes,
    /// Any other type, by name
    Named(&'static str),
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Null => f.write_str("null"),
            TypeTag::Bool => f.write_str("bool"),
            TypeTag::Int => f.write_str("int"),
            TypeTag::Text => f.write_str("text"),
            TypeTag::Bytes => f.write_str("bytes"),
            TypeTag::Named(name) => f.write_str(name),
        }
    }
}

/// Value passed into or produced by a conversion
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    Bytes(Vec<u8>),
}

impl Value {
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Text(_) => TypeTag::Text,
            Value::Bytes(_) => TypeTag::Bytes,
        }
    }
}

/// Optional description of where a conversion happens (e.g. a property)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionContext {
    pub property: Option<String>,
}

/// A converter between [`Value`]s and one target type
pub trait Converter {
    type Target;

    /// Whether values of `source` can be converted into `Target`
    fn can_convert_from(&self, context: Option<&ConversionContext>, source: TypeTag) -> bool;

    /// Whether `Target` can be converted into `destination`
    fn can_convert_to(&self, context: Option<&ConversionContext>, destination: TypeTag) -> bool;

    /// Convert `value` into `Target`; an absent `locale` means the ambient one
    ///
    /// # Errors
    /// `UnsupportedSource` for values this converter does not accept.
    fn convert_from(
        &self,
        context: Option<&ConversionContext>,
        locale: Option<&Locale>,
        value: &Value,
    ) -> Result<Self::Target, ConversionError>;

    /// Convert `value` (absent = null target) into `destination`
    ///
    /// # Errors
    /// `UnsupportedDestination` for destinations this converter cannot produce.
    fn convert_to(
        &self,
        context: Option<&ConversionContext>,
        locale: Option<&Locale>,
        value: Option<&Self::Target>,
        destination: TypeTag,
    ) -> Result<Value, ConversionError>;
}

/// Failure kind exposed to the `throws` assertions
///
/// Both unsupported directions share one kind; the direction is kept on the
/// error value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionErrorKind {
    Unsupported,
    Malformed,
}

/// Conversion failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The converter does not accept values of this type
    #[error("{converter} cannot convert from {from}")]
    UnsupportedSource {
        converter: &'static str,
        from: TypeTag,
    },

    /// The converter cannot produce this type
    #[error("{converter} cannot convert to {to}")]
    UnsupportedDestination {
        converter: &'static str,
        to: TypeTag,
    },

    /// The value has a supported type but unreadable content
    #[error("{converter} could not read '{param}': {reason}")]
    Malformed {
        converter: &'static str,
        param: &'static str,
        reason: String,
    },
}

impl FailureShape for ConversionError {
    type Kind = ConversionErrorKind;

    fn kind(&self) -> ConversionErrorKind {
        match self {
            ConversionError::UnsupportedSource { .. }
            | ConversionError::UnsupportedDestination { .. } => ConversionErrorKind::Unsupported,
            ConversionError::Malformed { .. } => ConversionErrorKind::Malformed,
        }
    }

    fn param_name(&self) -> Option<&str> {
        match self {
            ConversionError::Malformed { param, .. } => Some(*param),
            _ => None,
        }
    }
}
