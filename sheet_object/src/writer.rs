//! Tabular writer
//!
//! Lays out a title row, a label row and one row per record. Column order is
//! exactly the alias table order.

use type_mapping::{is_readable, to_text, TypeTag};

use crate::alias::AliasTable;
use crate::errors::SheetError;
use crate::grid::{Cell, LogicalGrid};
use crate::introspect::FieldIndex;
use crate::traits::TabularRecord;
use crate::debug_log;

/// Convert records into a logical grid.
///
/// Without an alias table every usable field becomes a column labelled with its
/// own name; without a title the record name is used. Fields the alias names
/// but the record lacks, and null values, produce blank cells.
pub fn write_records<R: TabularRecord>(
    records: &[R],
    alias: Option<&AliasTable>,
    title: Option<&str>,
) -> Result<LogicalGrid, SheetError> {
    let fields = FieldIndex::of::<R>()?;

    let derived;
    let alias = match alias {
        Some(alias) => alias,
        None => {
            derived = AliasTable::from_descriptors(fields.descriptors());
            &derived
        }
    };

    let title = title.unwrap_or_else(|| fields.record_name());
    let columns: Vec<(&str, Option<TypeTag>)> = alias
        .iter()
        .map(|entry| (entry.field.as_str(), fields.tag_of(&entry.field)))
        .collect();

    for (entry, (_, tag)) in alias.iter().zip(&columns) {
        match tag {
            None => tracing::trace!(
                label = entry.label.as_str(),
                field = entry.field.as_str(),
                record = fields.record_name(),
                "Column names an unknown field, cells stay blank"
            ),
            Some(tag) if !is_readable(*tag) => tracing::trace!(
                label = entry.label.as_str(),
                %tag,
                "Column cannot be read back"
            ),
            Some(_) => {}
        }
    }

    let mut grid = LogicalGrid::new(title, alias.labels().map(str::to_string).collect());

    for record in records {
        let row: Vec<Cell> = columns
            .iter()
            .map(|(field, tag)| {
                let tag = (*tag)?;
                record
                    .get_field(field)
                    .and_then(|value| to_text(&value, tag))
            })
            .collect();

        grid.push_data_row(row);
        debug_log!("Created row {} for {}", grid.row_count(), fields.record_name());
    }

    Ok(grid)
}
