//! Sheet Object - Core tabular mapping layer for SheetHaus
//!
//! This crate provides the foundational types and traits for converting records
//! to and from a logical grid: field introspection, alias tables, the grid itself,
//! and the writer/reader pair.

// Lets derive-generated `sheet_object::...` paths resolve inside this crate's own tests
extern crate self as sheet_object;

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod alias;
pub mod errors;
pub mod grid;
pub mod introspect;
pub mod prelude;
pub mod reader;
pub mod traits;
pub mod writer;

#[cfg(test)]
mod record_tests;

pub use alias::{AliasEntry, AliasTable};
pub use errors::{AliasError, IntrospectionError, LayoutError, SheetError};
pub use grid::{Cell, LogicalGrid, RowKind, FIRST_DATA_ROW, HEADER_ROW, TITLE_ROW};
pub use introspect::{describe, FieldIndex, SERIAL_VERSION_FIELD};
pub use reader::{read_records, read_records_detailed, FieldIssue, ReadReport};
pub use traits::*;
pub use writer::write_records;

// Re-exported for derive-generated code, which only names `sheet_object::...`
pub use record_derive::{record, Tabular};
pub use type_mapping;
