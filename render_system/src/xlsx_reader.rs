//! XLSX workbook → logical grid

use std::io::{Read, Seek};

use calamine::{open_workbook_from_rs, Data, ExcelDateTime, Range, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime};
use sheet_object::{Cell, LogicalGrid};
use type_mapping::format_temporal;

use crate::errors::RenderError;

/// Largest float still printed as a plain integer
const MAX_EXACT_INTEGRAL: f64 = 1e15;

pub fn load_xlsx<RS: Read + Seek>(source: RS, sheet_index: usize) -> Result<LogicalGrid, RenderError> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(source)?;
    let sheet_names = workbook.sheet_names();

    if sheet_names.is_empty() {
        return Err(RenderError::InvalidFormat(
            "Workbook contains no sheets".to_string(),
        ));
    }

    let sheet_name = sheet_names.get(sheet_index).cloned().ok_or_else(|| {
        RenderError::SheetNotFound(format!(
            "index {} (workbook has {} sheets)",
            sheet_index,
            sheet_names.len()
        ))
    })?;

    // The declared dimension still counts trailing rows made only of blank cells
    let last_row = workbook
        .worksheet_cells_reader(&sheet_name)?
        .dimensions()
        .end
        .0 as usize;

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range_to_rows(&range);
    pad_to_last_row(&mut rows, last_row);

    tracing::debug!(
        "Parsed sheet '{}': {} rows starting at {:?}",
        sheet_name,
        rows.len(),
        range.start()
    );

    Ok(LogicalGrid::from_rows(rows))
}

/// Absolute rows of the sheet; the used range's leading offset becomes blanks
fn range_to_rows(range: &Range<Data>) -> Vec<Vec<Cell>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); start_row as usize];

    for row in range.rows() {
        let mut cells: Vec<Cell> = vec![None; start_col as usize];
        cells.extend(row.iter().map(cell_text));
        rows.push(cells);
    }

    rows
}

fn pad_to_last_row(rows: &mut Vec<Vec<Cell>>, last_row: usize) {
    if !rows.is_empty() && rows.len() <= last_row {
        rows.resize(last_row + 1, Vec::new());
    }
}

/// Normalize one cell to the text the coercion rules expect
pub fn cell_text(cell: &Data) -> Cell {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(format_number(*f)),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(excel_datetime_text(dt)),
        Data::DateTimeIso(s) => Some(iso_datetime_text(s)),
        Data::DurationIso(s) => Some(s.clone()),
    }
}

/// Dates follow the workbook's epoch; durations stay numeric
fn excel_datetime_text(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return format_number(dt.as_f64());
    }
    match dt.as_datetime() {
        Some(value) => format_temporal(&value),
        None => format_number(dt.as_f64()),
    }
}

fn iso_datetime_text(text: &str) -> String {
    if let Ok(value) = text.parse::<NaiveDateTime>() {
        return format_temporal(&value);
    }
    match text.parse::<NaiveDate>().ok().and_then(|d| d.and_hms_opt(0, 0, 0)) {
        Some(value) => format_temporal(&value),
        None => text.to_string(),
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGRAL {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::ExcelDateTimeType;

    #[test]
    fn test_numbers_lose_trailing_zero_fraction() {
        assert_eq!(cell_text(&Data::Float(0.0)), Some("0".to_string()));
        assert_eq!(cell_text(&Data::Float(42.0)), Some("42".to_string()));
        assert_eq!(cell_text(&Data::Float(-7.0)), Some("-7".to_string()));
        assert_eq!(cell_text(&Data::Float(3.25)), Some("3.25".to_string()));
        assert_eq!(cell_text(&Data::Int(9)), Some("9".to_string()));
    }

    #[test]
    fn test_blank_like_cells() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(
            cell_text(&Data::Error(calamine::CellErrorType::Div0)),
            None
        );
        assert_eq!(cell_text(&Data::Bool(true)), Some("true".to_string()));
    }

    const MORNING: f64 = (9.0 * 3600.0 + 5.0 * 60.0) / 86400.0;

    fn excel_cell(value: f64, datetime_type: ExcelDateTimeType, is_1904: bool) -> Data {
        Data::DateTime(ExcelDateTime::new(value, datetime_type, is_1904))
    }

    #[test]
    fn test_date_cells_use_workbook_epoch() {
        let expected = Some("2023-03-01 09:05:00".to_string());
        assert_eq!(
            cell_text(&excel_cell(44986.0 + MORNING, ExcelDateTimeType::DateTime, false)),
            expected
        );
        assert_eq!(
            cell_text(&excel_cell(43524.0 + MORNING, ExcelDateTimeType::DateTime, true)),
            expected
        );
    }

    #[test]
    fn test_duration_cells_stay_numeric() {
        assert_eq!(
            cell_text(&excel_cell(1.5, ExcelDateTimeType::TimeDelta, false)),
            Some("1.5".to_string())
        );
    }

    #[test]
    fn test_iso_cells_use_temporal_pattern() {
        assert_eq!(
            cell_text(&Data::DateTimeIso("2023-03-01T09:05:00".to_string())),
            Some("2023-03-01 09:05:00".to_string())
        );
        assert_eq!(
            cell_text(&Data::DateTimeIso("2023-03-01".to_string())),
            Some("2023-03-01 00:00:00".to_string())
        );
        assert_eq!(
            cell_text(&Data::DurationIso("PT1H".to_string())),
            Some("PT1H".to_string())
        );
    }

    #[test]
    fn test_trailing_blank_rows_restored() {
        let mut rows = vec![
            vec![Some("Title".to_string())],
            vec![Some("a".to_string()), Some("b".to_string())],
            vec![Some("1".to_string()), None],
        ];
        pad_to_last_row(&mut rows, 4);
        assert_eq!(rows.len(), 5);
        assert!(rows[4].is_empty());

        pad_to_last_row(&mut rows, 2);
        assert_eq!(rows.len(), 5);

        let mut empty: Vec<Vec<Cell>> = Vec::new();
        pad_to_last_row(&mut empty, 3);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_leading_offset_restored() {
        let mut range: Range<Data> = Range::new((1, 2), (2, 3));
        range.set_value((1, 2), Data::String("Title".to_string()));
        range.set_value((2, 2), Data::String("A".to_string()));
        range.set_value((2, 3), Data::String("B".to_string()));

        let rows = range_to_rows(&range);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_empty());
        assert_eq!(rows[1], vec![None, None, Some("Title".to_string()), None]);
        assert_eq!(
            rows[2],
            vec![None, None, Some("A".to_string()), Some("B".to_string())]
        );
    }
}
