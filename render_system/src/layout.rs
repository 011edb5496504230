//! Sheet geometry helpers

use sheet_object::{LogicalGrid, HEADER_ROW};

use crate::errors::RenderError;

/// Excel's default column width in characters, rounded down
pub const DEFAULT_COLUMN_WIDTH: usize = 8;
pub const MAX_COLUMN_WIDTH: usize = 255;

pub const MAX_ROWS: usize = 1_048_576;
pub const MAX_COLUMNS: usize = 16_384;

/// Width of every header column, sized to the longest cell below the title.
///
/// Lengths are counted in UTF-8 bytes so that wide CJK text gets roughly two
/// character cells per glyph.
pub fn column_widths(grid: &LogicalGrid) -> Vec<f64> {
    let mut widths = vec![DEFAULT_COLUMN_WIDTH; grid.column_count()];

    for row in grid.rows().iter().skip(HEADER_ROW) {
        for (width, cell) in widths.iter_mut().zip(row) {
            if let Some(text) = cell {
                *width = (*width).max(text.len());
            }
        }
    }

    widths
        .into_iter()
        .map(|width| width.min(MAX_COLUMN_WIDTH) as f64)
        .collect()
}

pub fn row_num(index: usize) -> Result<u32, RenderError> {
    if index >= MAX_ROWS {
        return Err(RenderError::InvalidFormat(format!(
            "Row {} exceeds the sheet limit of {} rows",
            index, MAX_ROWS
        )));
    }
    u32::try_from(index).map_err(|e| RenderError::InvalidFormat(e.to_string()))
}

pub fn col_num(index: usize) -> Result<u16, RenderError> {
    if index >= MAX_COLUMNS {
        return Err(RenderError::InvalidFormat(format!(
            "Column {} exceeds the sheet limit of {} columns",
            index, MAX_COLUMNS
        )));
    }
    u16::try_from(index).map_err(|e| RenderError::InvalidFormat(e.to_string()))
}
