//! Convenience re-exports for common sheet-object usage

// Core traits
pub use crate::traits::{FieldDescriptor, TabularRecord};

// Mapping and layout
pub use crate::alias::{AliasEntry, AliasTable};
pub use crate::grid::{Cell, LogicalGrid};
pub use crate::introspect::FieldIndex;

// Conversion entry points
pub use crate::reader::{read_records, read_records_detailed, FieldIssue, ReadReport};
pub use crate::writer::write_records;

// Error types
pub use crate::errors::{AliasError, IntrospectionError, LayoutError, SheetError};

// Macros
pub use record_derive::{record, Tabular};

// Value model
pub use type_mapping::{CoercionError, FieldValue, TypeTag};
