//! Coercion rules between field values and cell text
//!
//! Writing never fails: every value has a textual form. Reading is selected
//! by the target field's `TypeTag` and may fail, but only ever for one field.

use chrono::NaiveDateTime;

use crate::errors::CoercionError;
use crate::types::{FieldValue, TypeTag};

/// Fixed timestamp pattern (`yyyy-MM-dd HH:mm:ss`, 24-hour clock)
pub const TEMPORAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Integral decimals at or beyond this magnitude no longer fit in `i64`
const MAX_I64_AS_F64: f64 = 9.2e18;

/// Render a value as cell text. `None` means a blank cell.
pub fn to_text(value: &FieldValue, type_tag: TypeTag) -> Option<String> {
    match value {
        FieldValue::Null => None,
        FieldValue::Text(s) | FieldValue::Other(s) => Some(s.clone()),
        FieldValue::Integer(i) => Some(i.to_string()),
        FieldValue::Decimal(f) => {
            if type_tag == TypeTag::Integer
                && f.is_finite()
                && f.fract() == 0.0
                && f.abs() < MAX_I64_AS_F64
            {
                Some(format!("{}", *f as i64))
            } else {
                Some(f.to_string())
            }
        }
        FieldValue::Boolean(b) => Some(b.to_string()),
        FieldValue::Temporal(dt) => Some(format_temporal(dt)),
    }
}

/// Parse cell text into a value for a field of the given tag.
/// Blank text yields `FieldValue::Null` for every readable tag.
pub fn from_text(text: &str, type_tag: TypeTag) -> Result<FieldValue, CoercionError> {
    if type_tag == TypeTag::Other {
        return Err(CoercionError::Unsupported { type_tag });
    }

    if text.trim().is_empty() {
        return Ok(FieldValue::Null);
    }

    match type_tag {
        TypeTag::Text => Ok(FieldValue::Text(text.to_string())),
        TypeTag::Integer => parse_integer(text),
        TypeTag::Decimal => text
            .trim()
            .parse::<f64>()
            .map(FieldValue::Decimal)
            .map_err(|_| CoercionError::InvalidDecimal {
                text: text.to_string(),
            }),
        TypeTag::Boolean => parse_boolean(text).map(FieldValue::Boolean),
        TypeTag::Temporal => parse_temporal(text).map(FieldValue::Temporal),
        TypeTag::Other => Err(CoercionError::Unsupported { type_tag }),
    }
}

/// Digits wider than `i64` stay as text for the field's own parser
fn parse_integer(text: &str) -> Result<FieldValue, CoercionError> {
    let trimmed = text.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Ok(FieldValue::Integer(i));
    }

    let digits = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(FieldValue::Text(trimmed.to_string()))
    } else {
        Err(CoercionError::InvalidInteger {
            text: text.to_string(),
        })
    }
}

pub fn format_temporal(value: &NaiveDateTime) -> String {
    value.format(TEMPORAL_FORMAT).to_string()
}

pub fn parse_temporal(text: &str) -> Result<NaiveDateTime, CoercionError> {
    NaiveDateTime::parse_from_str(text.trim(), TEMPORAL_FORMAT).map_err(|_| {
        CoercionError::InvalidTemporal {
            text: text.to_string(),
            pattern: TEMPORAL_FORMAT,
        }
    })
}

pub(crate) fn parse_boolean(text: &str) -> Result<bool, CoercionError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Ok(true),
        "false" | "no" | "n" | "off" | "0" => Ok(false),
        _ => Err(CoercionError::InvalidBoolean {
            text: text.to_string(),
        }),
    }
}
