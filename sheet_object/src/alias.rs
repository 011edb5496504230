//! Alias tables
//!
//! An ordered correspondence between external column labels and record field
//! names. Writing walks it in order to lay out columns; reading looks it up by
//! label.

use serde::{Deserialize, Serialize};

use crate::errors::{AliasError, IntrospectionError};
use crate::introspect::describe;
use crate::traits::{FieldDescriptor, TabularRecord};

/// One column: external label and the field it carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub label: String,
    pub field: String,
}

/// Ordered label/field pairs; labels unique, fields unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    /// Build from `(label, field)` pairs, in column order.
    ///
    /// The same table serves the read direction: a grid's header labels are
    /// looked up with [`AliasTable::field_for_label`].
    pub fn from_explicit<I, L, F>(pairs: I) -> Result<Self, AliasError>
    where
        I: IntoIterator<Item = (L, F)>,
        L: Into<String>,
        F: Into<String>,
    {
        let mut entries: Vec<AliasEntry> = Vec::new();

        for (label, field) in pairs {
            let label = label.into();
            let field = field.into();

            if label.is_empty() {
                return Err(AliasError::EmptyLabel { field });
            }
            if field.is_empty() {
                return Err(AliasError::EmptyField { label });
            }
            if entries.iter().any(|entry| entry.label == label) {
                return Err(AliasError::DuplicateLabel { label });
            }
            if let Some(existing) = entries.iter().find(|entry| entry.field == field) {
                return Err(AliasError::DuplicateField {
                    field,
                    first_label: existing.label.clone(),
                    second_label: label,
                });
            }

            entries.push(AliasEntry { label, field });
        }

        Ok(Self { entries })
    }

    /// Build from `(field, label)` pairs, the write-side orientation
    pub fn from_field_labels<I, F, L>(pairs: I) -> Result<Self, AliasError>
    where
        I: IntoIterator<Item = (F, L)>,
        F: Into<String>,
        L: Into<String>,
    {
        Self::from_explicit(pairs.into_iter().map(|(field, label)| (label, field)))
    }

    /// Identity mapping over the usable fields of `R`, in declaration order
    pub fn from_type<R: TabularRecord>() -> Result<Self, IntrospectionError> {
        Ok(Self::from_descriptors(&describe::<R>()?))
    }

    /// Identity mapping over already-introspected descriptors
    pub fn from_descriptors(fields: &[FieldDescriptor]) -> Self {
        Self {
            entries: fields
                .iter()
                .map(|field| AliasEntry {
                    label: field.name.to_string(),
                    field: field.name.to_string(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AliasEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    /// Labels in column order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    /// Field names in column order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.field.as_str())
    }

    pub fn field_for_label(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.field.as_str())
    }

    pub fn label_for_field(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.label.as_str())
    }
}

impl<'a> IntoIterator for &'a AliasTable {
    type Item = &'a AliasEntry;
    type IntoIter = std::slice::Iter<'a, AliasEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Deserialization re-runs the uniqueness checks
impl<'de> Deserialize<'de> for AliasTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            entries: Vec<AliasEntry>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::from_explicit(raw.entries.into_iter().map(|e| (e.label, e.field)))
            .map_err(serde::de::Error::custom)
    }
}
