//! Convenience re-exports for common SheetHaus usage
//!
//! This prelude module re-exports the most commonly used items from the SheetHaus ecosystem,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use sheethaus::prelude::*;
//!
//! // Now you have access to all the common SheetHaus types, traits and macros
//! ```

// Core SheetHaus components
pub use crate::core::{ExportJob, SheetHaus};
pub use crate::errors::SheetHausError;

// Re-export centralized config
pub use config::{AppConfig, CellStyleConfig, HorizontalAlign, NoteConfig, StyleConfig};

// Re-export commonly used sheet-object types for convenience
pub use sheet_object::prelude::*;

// Re-export sheet_object module for macro-generated code
pub use sheet_object;

// Renderers
pub use render_system::{GridRenderer, RenderError, XlsxRenderer};

// Common external dependencies
pub use anyhow;
pub use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
pub use uuid::Uuid;
