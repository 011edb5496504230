//! Tabular reader
//!
//! Rebuilds records from a logical grid. The header row is matched against the
//! alias table by label; every data row becomes one default-constructed record
//! whose mapped fields are filled in one by one. A cell that fails to convert
//! leaves its field at the default and never discards the rest of the record.

use std::collections::BTreeMap;

use type_mapping::{from_text, CoercionError, FieldValue, TypeTag};

use crate::alias::AliasTable;
use crate::errors::{LayoutError, SheetError};
use crate::grid::{LogicalGrid, FIRST_DATA_ROW};
use crate::introspect::FieldIndex;
use crate::traits::TabularRecord;
use crate::debug_log;

/// A single field that was left at its default
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssue {
    /// Absolute grid row index
    pub row: usize,
    pub column: usize,
    pub label: String,
    pub field: String,
    pub error: CoercionError,
}

/// Records plus every field-level failure met while reading them
#[derive(Debug, Clone)]
pub struct ReadReport<R> {
    pub records: Vec<R>,
    pub issues: Vec<FieldIssue>,
}

impl<R> ReadReport<R> {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

#[derive(Debug)]
struct MappedColumn<'a> {
    index: usize,
    label: &'a str,
    field: &'a str,
    tag: TypeTag,
}

/// Convert a grid into records, dropping field-level failures
pub fn read_records<R: TabularRecord>(
    grid: &LogicalGrid,
    alias: Option<&AliasTable>,
) -> Result<Vec<R>, SheetError> {
    read_records_detailed(grid, alias).map(ReadReport::into_records)
}

/// Convert a grid into records, keeping a report of field-level failures.
///
/// Without an alias table the header labels are expected to be field names.
pub fn read_records_detailed<R: TabularRecord>(
    grid: &LogicalGrid,
    alias: Option<&AliasTable>,
) -> Result<ReadReport<R>, SheetError> {
    let fields = FieldIndex::of::<R>()?;

    let header = match grid.row_count() {
        0 => return Err(LayoutError::MissingTitleRow.into()),
        1 => return Err(LayoutError::MissingHeaderRow { rows: 1 }.into()),
        _ => grid.header().unwrap_or_default(),
    };

    let derived;
    let alias = match alias {
        Some(alias) => alias,
        None => {
            derived = AliasTable::from_descriptors(fields.descriptors());
            &derived
        }
    };

    // field -> column; a later header for the same field wins
    let mut by_field: BTreeMap<&str, (usize, &str)> = BTreeMap::new();
    for (index, cell) in header.iter().enumerate() {
        let Some(label) = cell.as_deref().filter(|label| !label.is_empty()) else {
            continue;
        };
        match alias.field_for_label(label) {
            Some(field) => {
                by_field.insert(field, (index, label));
            }
            None => tracing::trace!(label, column = index, "Header is not mapped"),
        }
    }

    let mut columns: Vec<MappedColumn> = Vec::with_capacity(by_field.len());
    for (field, (index, label)) in by_field {
        match fields.tag_of(field) {
            Some(tag) => columns.push(MappedColumn {
                index,
                label,
                field,
                tag,
            }),
            None => tracing::debug!(
                label,
                field,
                record = fields.record_name(),
                "Column maps to a field the record does not declare; ignored"
            ),
        }
    }
    columns.sort_by_key(|column| column.index);

    let mut report = ReadReport {
        records: Vec::with_capacity(grid.data_row_count()),
        issues: Vec::new(),
    };

    for (row_index, cells) in grid.data_rows() {
        debug_assert!(row_index >= FIRST_DATA_ROW);
        let mut record = R::default();

        for column in &columns {
            let text = cells
                .get(column.index)
                .and_then(|cell| cell.as_deref())
                .unwrap_or("");

            if let Err(error) = read_field(&mut record, column, text) {
                tracing::debug!(
                    row = row_index,
                    label = column.label,
                    field = column.field,
                    %error,
                    "Field left at default"
                );
                report.issues.push(FieldIssue {
                    row: row_index,
                    column: column.index,
                    label: column.label.to_string(),
                    field: column.field.to_string(),
                    error,
                });
            }
        }

        report.records.push(record);
    }

    debug_log!(
        "Read {} {} records with {} field issues",
        report.records.len(),
        fields.record_name(),
        report.issues.len()
    );

    Ok(report)
}

fn read_field<R: TabularRecord>(
    record: &mut R,
    column: &MappedColumn,
    text: &str,
) -> Result<(), CoercionError> {
    // Blank cells leave the field unset
    if text.trim().is_empty() {
        return Ok(());
    }

    match from_text(text, column.tag)? {
        FieldValue::Null => Ok(()),
        value => record.set_field(column.field, value),
    }
}
