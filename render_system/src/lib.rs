//! Render System - physical document support for SheetHaus
//!
//! Turns logical grids into styled XLSX workbooks (`rust_xlsxwriter`) and reads
//! them back (`calamine`), normalizing every cell to text.

pub mod errors;
pub mod layout;
pub mod renderer;
pub mod styles;
pub mod xlsx_reader;
pub mod xlsx_writer;

pub use errors::RenderError;
pub use layout::column_widths;
pub use renderer::{GridRenderer, XlsxRenderer};
pub use styles::{convert_style_to_format, SheetFormats};
pub use xlsx_reader::{cell_text, load_xlsx};
pub use xlsx_writer::{save_xlsx, WriteOptions};
