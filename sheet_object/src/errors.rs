use thiserror::Error;

/// A record type that cannot be mapped to columns at all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntrospectionError {
    #[error("Record type '{record}' exposes no usable fields")]
    NoUsableFields { record: String },
}

/// An explicit alias table that breaks the one-label-one-field rule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AliasError {
    #[error("Duplicate column label '{label}' in alias table")]
    DuplicateLabel { label: String },

    #[error("Field '{field}' is mapped by both '{first_label}' and '{second_label}'")]
    DuplicateField {
        field: String,
        first_label: String,
        second_label: String,
    },

    #[error("Alias table entry for field '{field}' has an empty label")]
    EmptyLabel { field: String },

    #[error("Alias table entry '{label}' names no field")]
    EmptyField { label: String },
}

/// A grid that lacks the rows needed to establish the column mapping
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Grid has no title row")]
    MissingTitleRow,

    #[error("Grid has no header row: expected at least 2 rows, found {rows}")]
    MissingHeaderRow { rows: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    #[error("Introspection error: {0}")]
    Introspection(#[from] IntrospectionError),

    #[error("Alias error: {0}")]
    Alias(#[from] AliasError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}
