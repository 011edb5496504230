//! Logical grid
//!
//! The format-agnostic rows and cells exchanged with the renderer. Row 0 holds
//! the title, row 1 the column labels, every later row one record.

use serde::{Deserialize, Serialize};

pub const TITLE_ROW: usize = 0;
pub const HEADER_ROW: usize = 1;
pub const FIRST_DATA_ROW: usize = 2;

/// Cell text; `None` is a blank cell
pub type Cell = Option<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    Title,
    Header,
    Data,
}

impl RowKind {
    pub fn of(index: usize) -> Self {
        match index {
            TITLE_ROW => RowKind::Title,
            HEADER_ROW => RowKind::Header,
            _ => RowKind::Data,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalGrid {
    /// Columns the title cell spans
    title_span: usize,
    rows: Vec<Vec<Cell>>,
}

impl LogicalGrid {
    /// Title and header rows; the title spans every header column
    pub fn new(title: impl Into<String>, header: Vec<String>) -> Self {
        Self {
            title_span: header.len(),
            rows: vec![
                vec![Some(title.into())],
                header.into_iter().map(Some).collect(),
            ],
        }
    }

    /// Normalize raw rows decoded from a physical document.
    ///
    /// The title row keeps only its first cell, data rows are padded or cut to
    /// the header width. Fewer than two rows are kept as-is so the reader can
    /// report the missing layout.
    pub fn from_rows(mut rows: Vec<Vec<Cell>>) -> Self {
        if let Some(title_row) = rows.get_mut(TITLE_ROW) {
            let title = title_row.drain(..).next().flatten();
            title_row.push(title);
        }

        let width = rows.get(HEADER_ROW).map(Vec::len).unwrap_or(0);
        for row in rows.iter_mut().skip(FIRST_DATA_ROW) {
            row.resize(width, None);
        }

        Self {
            title_span: width,
            rows,
        }
    }

    /// Append one record row, padded with blanks to the header width
    pub fn push_data_row(&mut self, mut cells: Vec<Cell>) {
        debug_assert!(self.rows.len() >= FIRST_DATA_ROW, "data row pushed before header");
        debug_assert!(cells.len() <= self.column_count(), "data row wider than header");
        cells.resize(self.column_count(), None);
        self.rows.push(cells);
    }

    pub fn title_span(&self) -> usize {
        self.title_span
    }

    pub fn title(&self) -> Option<&str> {
        self.rows
            .get(TITLE_ROW)
            .and_then(|row| row.first())
            .and_then(|cell| cell.as_deref())
    }

    pub fn header(&self) -> Option<&[Cell]> {
        self.rows.get(HEADER_ROW).map(Vec::as_slice)
    }

    /// Data rows with their absolute row index
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[Cell])> {
        self.rows
            .iter()
            .enumerate()
            .skip(FIRST_DATA_ROW)
            .map(|(index, row)| (index, row.as_slice()))
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(FIRST_DATA_ROW)
    }

    /// Width of the header row
    pub fn column_count(&self) -> usize {
        self.header().map(<[Cell]>::len).unwrap_or(0)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .and_then(|cell| cell.as_deref())
    }
}
