//! Validation utilities for type mapping
//!
//! This module answers which tags survive a trip through cell text.

use crate::types::TypeTag;

/// Check if values of this tag can be parsed back from cell text at all
pub fn is_readable(type_tag: TypeTag) -> bool {
    !matches!(type_tag, TypeTag::Other)
}

/// Check if a write followed by a read reproduces the value exactly
pub fn supports_text_round_trip(type_tag: TypeTag) -> bool {
    matches!(
        type_tag,
        TypeTag::Text | TypeTag::Integer | TypeTag::Boolean | TypeTag::Temporal
    )
}
