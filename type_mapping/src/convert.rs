//! Conversions between concrete Rust field types and FieldValue
//!
//! Derive-generated getters call `ToFieldValue`, setters call `FromFieldValue`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::coerce::{parse_boolean, parse_temporal, to_text};
use crate::errors::CoercionError;
use crate::types::{FieldValue, TypeTag};

/// Trait for reading a record field as a FieldValue
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

/// Trait for storing a FieldValue into a record field
pub trait FromFieldValue: Sized {
    fn from_field_value(value: FieldValue) -> Result<Self, CoercionError>;
}

fn mismatch(expected: &'static str, found: &FieldValue) -> CoercionError {
    CoercionError::TypeMismatch {
        expected,
        found: found.kind(),
    }
}

macro_rules! impl_integer_conversions {
    ($($ty:ty),*) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue {
                    match i64::try_from(*self) {
                        Ok(v) => FieldValue::Integer(v),
                        // Wider than i64, keep the exact digits
                        Err(_) => FieldValue::Text(self.to_string()),
                    }
                }
            }

            impl FromFieldValue for $ty {
                fn from_field_value(value: FieldValue) -> Result<Self, CoercionError> {
                    match value {
                        FieldValue::Integer(i) => <$ty>::try_from(i).map_err(|_| {
                            CoercionError::OutOfRange {
                                value: i.to_string(),
                                target: stringify!($ty),
                            }
                        }),
                        FieldValue::Decimal(f) if f.is_finite() && f.fract() == 0.0 => {
                            Self::from_field_value(FieldValue::Integer(f as i64))
                        }
                        FieldValue::Text(s) => s.trim().parse::<$ty>().map_err(|e| {
                            CoercionError::InvalidText {
                                text: s.clone(),
                                target: stringify!($ty),
                                reason: e.to_string(),
                            }
                        }),
                        other => Err(mismatch(stringify!($ty), &other)),
                    }
                }
            }
        )*
    };
}

impl_integer_conversions!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_float_conversions {
    ($($ty:ty),*) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::Decimal(*self as f64)
                }
            }

            impl FromFieldValue for $ty {
                fn from_field_value(value: FieldValue) -> Result<Self, CoercionError> {
                    match value {
                        FieldValue::Decimal(f) => Ok(f as $ty),
                        FieldValue::Integer(i) => Ok(i as $ty),
                        FieldValue::Text(s) => s.trim().parse::<$ty>().map_err(|e| {
                            CoercionError::InvalidText {
                                text: s.clone(),
                                target: stringify!($ty),
                                reason: e.to_string(),
                            }
                        }),
                        other => Err(mismatch(stringify!($ty), &other)),
                    }
                }
            }
        )*
    };
}

impl_float_conversions!(f32, f64);

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }
}

impl FromFieldValue for String {
    fn from_field_value(value: FieldValue) -> Result<Self, CoercionError> {
        match value {
            FieldValue::Text(s) | FieldValue::Other(s) => Ok(s),
            FieldValue::Null => Err(mismatch("String", &FieldValue::Null)),
            other => Ok(to_text(&other, TypeTag::Text).unwrap_or_default()),
        }
    }
}

impl ToFieldValue for char {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.to_string())
    }
}

impl FromFieldValue for char {
    fn from_field_value(value: FieldValue) -> Result<Self, CoercionError> {
        match value {
            FieldValue::Text(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(CoercionError::InvalidText {
                        text: s.clone(),
                        target: "char",
                        reason: "expected exactly one character".to_string(),
                    }),
                }
            }
            other => Err(mismatch("char", &other)),
        }
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Boolean(*self)
    }
}

impl FromFieldValue for bool {
    fn from_field_value(value: FieldValue) -> Result<Self, CoercionError> {
        match value {
            FieldValue::Boolean(b) => Ok(b),
            FieldValue::Integer(i) => Ok(i != 0),
            FieldValue::Text(s) => parse_boolean(&s),
            other => Err(mismatch("bool", &other)),
        }
    }
}

impl ToFieldValue for NaiveDateTime {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Temporal(*self)
    }
}

impl FromFieldValue for NaiveDateTime {
    fn from_field_value(value: FieldValue) -> Result<Self, CoercionError> {
        match value {
            FieldValue::Temporal(dt) => Ok(dt),
            FieldValue::Text(s) => parse_temporal(&s),
            other => Err(mismatch("NaiveDateTime", &other)),
        }
    }
}

impl ToFieldValue for DateTime<Utc> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Temporal(self.naive_utc())
    }
}

impl FromFieldValue for DateTime<Utc> {
    fn from_field_value(value: FieldValue) -> Result<Self, CoercionError> {
        NaiveDateTime::from_field_value(value).map(|dt| dt.and_utc())
    }
}

impl ToFieldValue for NaiveDate {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Temporal(self.and_time(chrono::NaiveTime::MIN))
    }
}

impl FromFieldValue for NaiveDate {
    fn from_field_value(value: FieldValue) -> Result<Self, CoercionError> {
        NaiveDateTime::from_field_value(value).map(|dt| dt.date())
    }
}

impl ToFieldValue for Uuid {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.to_string())
    }
}

impl FromFieldValue for Uuid {
    fn from_field_value(value: FieldValue) -> Result<Self, CoercionError> {
        match value {
            FieldValue::Text(s) => Uuid::parse_str(s.trim()).map_err(|e| CoercionError::InvalidText {
                text: s.clone(),
                target: "Uuid",
                reason: e.to_string(),
            }),
            other => Err(mismatch("Uuid", &other)),
        }
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        match self {
            Some(v) => v.to_field_value(),
            None => FieldValue::Null,
        }
    }
}

impl<T: FromFieldValue> FromFieldValue for Option<T> {
    fn from_field_value(value: FieldValue) -> Result<Self, CoercionError> {
        match value {
            FieldValue::Null => Ok(None),
            other => T::from_field_value(other).map(Some),
        }
    }
}
