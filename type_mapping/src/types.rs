//! Type mapping definitions
//!
//! This module provides the closed set of type tags used to pick coercion
//! rules and the runtime value carried between records and cells.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic classification of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    Text,
    Integer,
    Decimal,
    Boolean,
    Temporal,
    Other,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Text => "Text",
            TypeTag::Integer => "Integer",
            TypeTag::Decimal => "Decimal",
            TypeTag::Boolean => "Boolean",
            TypeTag::Temporal => "Temporal",
            TypeTag::Other => "Other",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime value of a single record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    Temporal(NaiveDateTime),
    Other(String), // Already rendered, write-only
    Null,
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Short name of the variant, used in mismatch diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::Decimal(_) => "decimal",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Temporal(_) => "temporal",
            FieldValue::Other(_) => "other",
            FieldValue::Null => "null",
        }
    }

    /// Render an unregistered value through its `Debug` form
    pub fn other_debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        FieldValue::Other(format!("{:?}", value))
    }

    /// Render an unregistered value through its `Display` form
    pub fn other_display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        FieldValue::Other(value.to_string())
    }
}

/// Convert basic Rust values to FieldValue
impl From<String> for FieldValue {
    fn from(val: String) -> Self {
        FieldValue::Text(val)
    }
}

impl From<&str> for FieldValue {
    fn from(val: &str) -> Self {
        FieldValue::Text(val.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(val: i64) -> Self {
        FieldValue::Integer(val)
    }
}

impl From<i32> for FieldValue {
    fn from(val: i32) -> Self {
        FieldValue::Integer(val as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(val: f64) -> Self {
        FieldValue::Decimal(val)
    }
}

impl From<bool> for FieldValue {
    fn from(val: bool) -> Self {
        FieldValue::Boolean(val)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(val: NaiveDateTime) -> Self {
        FieldValue::Temporal(val)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => FieldValue::Null,
        }
    }
}
