//! Renderer abstraction
//!
//! The mapping layer produces and consumes `LogicalGrid` values only; a
//! renderer turns them into a physical document and back.

use std::io::{Cursor, Read, Seek, Write};

use config::{AppConfig, NoteConfig};
use sheet_object::LogicalGrid;

use crate::errors::RenderError;
use crate::styles::SheetFormats;
use crate::xlsx_reader::load_xlsx;
use crate::xlsx_writer::{save_xlsx, WriteOptions};

pub trait GridRenderer {
    /// Write the grid as one complete document
    fn render<W: Write>(&self, grid: &LogicalGrid, sink: &mut W) -> Result<(), RenderError>;

    /// Decode the configured sheet of a document into raw rows
    fn parse<RS: Read + Seek>(&self, source: RS) -> Result<LogicalGrid, RenderError>;

    fn render_to_bytes(&self, grid: &LogicalGrid) -> Result<Vec<u8>, RenderError> {
        let mut buffer = Vec::new();
        self.render(grid, &mut buffer)?;
        Ok(buffer)
    }

    fn parse_bytes(&self, bytes: &[u8]) -> Result<LogicalGrid, RenderError> {
        self.parse(Cursor::new(bytes))
    }
}

/// Single-sheet XLSX documents
#[derive(Debug, Clone)]
pub struct XlsxRenderer {
    sheet_name: String,
    sheet_index: usize,
    autofit_columns: bool,
    header_note: Option<NoteConfig>,
    formats: SheetFormats,
}

impl XlsxRenderer {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            sheet_name: config.export.sheet_name.clone(),
            sheet_index: config.import.sheet_index,
            autofit_columns: config.export.autofit_columns,
            header_note: config.export.header_note.clone(),
            formats: SheetFormats::from_config(&config.styles),
        }
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn sheet_index(&self) -> usize {
        self.sheet_index
    }
}

impl Default for XlsxRenderer {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl GridRenderer for XlsxRenderer {
    fn render<W: Write>(&self, grid: &LogicalGrid, sink: &mut W) -> Result<(), RenderError> {
        let options = WriteOptions {
            sheet_name: &self.sheet_name,
            formats: &self.formats,
            autofit_columns: self.autofit_columns,
            header_note: self.header_note.as_ref(),
        };
        save_xlsx(grid, &options, sink)
    }

    fn parse<RS: Read + Seek>(&self, source: RS) -> Result<LogicalGrid, RenderError> {
        load_xlsx(source, self.sheet_index)
    }
}
