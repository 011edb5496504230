//! Record capability definitions
//!
//! The engine never inspects a record's layout. It enumerates descriptors and
//! gets or sets fields by name through this trait.

use type_mapping::{CoercionError, FieldValue, TypeTag};

/// Name and semantic type of one record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub type_tag: TypeTag,
    /// Whitespace-free Rust type as written in the struct
    pub rust_type: &'static str,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, type_tag: TypeTag, rust_type: &'static str) -> Self {
        Self {
            name,
            type_tag,
            rust_type,
        }
    }
}

/// Field access by name for a record type.
/// This trait should be derived using the `#[record]` attribute macro, which
/// automatically includes all necessary derives.
///
/// Recommended usage:
/// ```rust,ignore
/// use sheet_object::record;
///
/// #[record]
/// #[tabular(name = "Brands")]
/// pub struct Brand {
///     pub id: i64,
///     pub name: String,
///     pub first_char: String,
/// }
/// ```
///
/// Manual usage:
/// ```rust,ignore
/// use sheet_object::Tabular;
///
/// #[derive(Debug, Clone, Default, Tabular)]
/// pub struct Brand {
///     // fields...
/// }
/// ```
pub trait TabularRecord: Default {
    /// Display name of the record type, used as the default title
    fn record_name() -> &'static str;

    /// Fields in declaration order, `#[field(skip)]` fields excluded
    fn describe_fields() -> Vec<FieldDescriptor>;

    /// Read a field. `None` if the type has no field of that name.
    fn get_field(&self, name: &str) -> Option<FieldValue>;

    /// Store a value into a field
    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), CoercionError>;
}
