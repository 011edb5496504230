//! Field-scoped coercion errors

use crate::types::TypeTag;
use thiserror::Error;

/// A single field could not be converted between its value and its cell text.
/// Never aborts a whole record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoercionError {
    #[error("Cannot read '{text}' as an integer")]
    InvalidInteger { text: String },

    #[error("Cannot read '{text}' as a decimal")]
    InvalidDecimal { text: String },

    #[error("Cannot read '{text}' as a boolean")]
    InvalidBoolean { text: String },

    #[error("Cannot read '{text}' as a timestamp: expected pattern {pattern}")]
    InvalidTemporal { text: String, pattern: &'static str },

    #[error("Values of type {type_tag} cannot be read back from text")]
    Unsupported { type_tag: TypeTag },

    #[error("Expected a {expected} value, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Value {value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("Cannot convert '{text}' to {target}: {reason}")]
    InvalidText {
        text: String,
        target: &'static str,
        reason: String,
    },

    #[error("Unknown field: {0}")]
    UnknownField(String),
}
