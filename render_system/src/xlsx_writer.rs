//! Logical grid → XLSX workbook

use std::io::Write;

use config::NoteConfig;
use rust_xlsxwriter::{Note, Workbook, Worksheet};
use sheet_object::{LogicalGrid, RowKind, HEADER_ROW, TITLE_ROW};

use crate::errors::RenderError;
use crate::layout::{col_num, column_widths, row_num};
use crate::styles::SheetFormats;

/// Everything the writer needs besides the grid
#[derive(Debug, Clone)]
pub struct WriteOptions<'a> {
    pub sheet_name: &'a str,
    pub formats: &'a SheetFormats,
    pub autofit_columns: bool,
    pub header_note: Option<&'a NoteConfig>,
}

pub fn save_xlsx<W: Write>(
    grid: &LogicalGrid,
    options: &WriteOptions<'_>,
    sink: &mut W,
) -> Result<(), RenderError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(options.sheet_name)?;

    write_title(worksheet, grid, options.formats)?;

    for (row_idx, row) in grid.rows().iter().enumerate().skip(HEADER_ROW) {
        let format = match RowKind::of(row_idx) {
            RowKind::Header => &options.formats.header,
            _ => &options.formats.data,
        };
        let row_no = row_num(row_idx)?;

        for (col_idx, cell) in row.iter().enumerate() {
            let col_no = col_num(col_idx)?;
            match cell {
                Some(text) => {
                    worksheet.write_string_with_format(row_no, col_no, text, format)?;
                }
                None => {
                    worksheet.write_blank(row_no, col_no, format)?;
                }
            }
        }
    }

    if let Some(note) = options.header_note {
        if grid.column_count() > 0 {
            let note = Note::new(&note.text).set_author(&note.author);
            worksheet.insert_note(row_num(HEADER_ROW)?, 0, &note)?;
        }
    }

    if options.autofit_columns {
        for (col_idx, width) in column_widths(grid).into_iter().enumerate() {
            worksheet.set_column_width(col_num(col_idx)?, width)?;
        }
    }

    let buffer = workbook.save_to_buffer()?;
    sink.write_all(&buffer)?;
    sink.flush()?;

    tracing::debug!(
        "Rendered {} rows x {} columns to sheet '{}' ({} bytes)",
        grid.row_count(),
        grid.column_count(),
        options.sheet_name,
        buffer.len()
    );

    Ok(())
}

/// Title cell, merged across the header width when it spans more than one column
fn write_title(
    worksheet: &mut Worksheet,
    grid: &LogicalGrid,
    formats: &SheetFormats,
) -> Result<(), RenderError> {
    let title = grid.title().unwrap_or_default();
    let row_no = row_num(TITLE_ROW)?;

    if grid.title_span() > 1 {
        let last_col = col_num(grid.title_span() - 1)?;
        worksheet.merge_range(row_no, 0, row_no, last_col, title, &formats.title)?;
    } else {
        worksheet.write_string_with_format(row_no, 0, title, &formats.title)?;
    }

    Ok(())
}
