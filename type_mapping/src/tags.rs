//! Type tag resolution
//!
//! Maps Rust type strings (as seen by the derive macro) to the closed
//! `TypeTag` set that selects coercion rules.

use crate::types::TypeTag;

/// Map a Rust type name to its TypeTag
pub fn rust_type_to_type_tag(rust_type: &str) -> TypeTag {
    // Normalize type string by removing all whitespace for consistent matching
    let normalized = rust_type.replace(' ', "");
    match strip_option(&normalized) {
        "String" | "std::string::String" | "&str" | "&'staticstr" | "char" => TypeTag::Text,
        // Uuid is parsed back through its canonical hyphenated text
        "Uuid" | "uuid::Uuid" => TypeTag::Text,
        "i8" | "i16" | "i32" | "i64" | "isize" => TypeTag::Integer,
        "u8" | "u16" | "u32" | "u64" | "usize" => TypeTag::Integer,
        "f32" | "f64" => TypeTag::Decimal,
        "bool" => TypeTag::Boolean,
        "NaiveDateTime" | "chrono::NaiveDateTime" => TypeTag::Temporal,
        "DateTime<Utc>" | "chrono::DateTime<chrono::Utc>" | "DateTime<chrono::Utc>" => {
            TypeTag::Temporal
        }
        "NaiveDate" | "chrono::NaiveDate" => TypeTag::Temporal,
        _ => TypeTag::Other,
    }
}

/// Check if a Rust type is Optional
pub fn is_optional_type(rust_type: &str) -> bool {
    let normalized = rust_type.replace(' ', "");
    normalized.starts_with("Option<") || normalized.starts_with("std::option::Option<")
}

/// Strip one `Option<...>` layer from a whitespace-free type string
pub fn strip_option(normalized: &str) -> &str {
    let inner = normalized
        .strip_prefix("std::option::Option<")
        .or_else(|| normalized.strip_prefix("Option<"));
    match inner.and_then(|rest| rest.strip_suffix('>')) {
        Some(inner) => inner,
        None => normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tags() {
        assert_eq!(rust_type_to_type_tag("String"), TypeTag::Text);
        assert_eq!(rust_type_to_type_tag("u64"), TypeTag::Integer);
        assert_eq!(rust_type_to_type_tag("f32"), TypeTag::Decimal);
        assert_eq!(rust_type_to_type_tag("bool"), TypeTag::Boolean);
        assert_eq!(rust_type_to_type_tag("uuid::Uuid"), TypeTag::Text);
    }

    #[test]
    fn test_temporal_tags() {
        assert_eq!(rust_type_to_type_tag("NaiveDateTime"), TypeTag::Temporal);
        assert_eq!(
            rust_type_to_type_tag("chrono :: DateTime < chrono :: Utc >"),
            TypeTag::Temporal
        );
        assert_eq!(rust_type_to_type_tag("chrono::NaiveDate"), TypeTag::Temporal);
    }

    #[test]
    fn test_optional_types() {
        assert!(is_optional_type("Option < i32 >"));
        assert!(!is_optional_type("i32"));
        assert_eq!(rust_type_to_type_tag("Option<i32>"), TypeTag::Integer);
        assert_eq!(
            rust_type_to_type_tag("std::option::Option<NaiveDateTime>"),
            TypeTag::Temporal
        );
    }

    #[test]
    fn test_unregistered_types() {
        assert_eq!(rust_type_to_type_tag("Vec<String>"), TypeTag::Other);
        assert_eq!(rust_type_to_type_tag("serde_json::Value"), TypeTag::Other);
        assert_eq!(rust_type_to_type_tag("Option<Vec<u8>>"), TypeTag::Other);
    }
}
