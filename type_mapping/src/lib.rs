//! Unified type mapping between Rust field types and tabular cell text
//! This crate provides the coercion rules shared across the sheethaus ecosystem

pub mod coerce;
pub mod convert;
pub mod errors;
pub mod tags;
pub mod types;
pub mod validate;

pub use coerce::{format_temporal, from_text, parse_temporal, to_text, TEMPORAL_FORMAT};
pub use convert::{FromFieldValue, ToFieldValue};
pub use errors::CoercionError;
pub use tags::{is_optional_type, rust_type_to_type_tag, strip_option};
pub use types::{FieldValue, TypeTag};
pub use validate::{is_readable, supports_text_round_trip};
