//! # SheetHaus
//!
//! Map plain Rust records to styled spreadsheets and back. Field access is
//! generated by a derive macro, column labels come from alias tables, and
//! imports tolerate cells that do not convert.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sheethaus::prelude::*;
//!
//! #[record]
//! #[tabular(name = "Goods")]
//! pub struct Goods {
//!     pub goods_name: String,
//!     pub price: f64,
//!     pub created_at: NaiveDateTime,
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sheethaus = SheetHaus::default();
//!
//!     let alias = AliasTable::from_field_labels([
//!         ("goods_name", "Name"),
//!         ("price", "Price"),
//!         ("created_at", "Created"),
//!     ])?;
//!
//!     let goods = vec![Goods {
//!         goods_name: "Pen".to_string(),
//!         price: 1.5,
//!         created_at: NaiveDateTime::default(),
//!     }];
//!
//!     sheethaus.export_to_path(&goods, Some(&alias), Some("Stock"), "goods.xlsx")?;
//!     let back: Vec<Goods> = sheethaus.import_from_path("goods.xlsx", Some(&alias))?;
//!     assert_eq!(back, goods);
//!
//!     Ok(())
//! }
//! ```

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

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::{ExportJob, SheetHaus};
pub use errors::SheetHausError;

// Re-export centralized config
pub use config::{AppConfig, CellStyleConfig, ExportConfig, ImportConfig, NoteConfig, StyleConfig};

// Re-export internal crates used by macros and public API
// These MUST be public for the generated macro code to work correctly
pub use record_derive;
pub use render_system;
pub use sheet_object;
pub use type_mapping;
