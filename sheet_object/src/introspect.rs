//! Type introspection
//!
//! Turns the derive-generated descriptor list into the ordered set of usable
//! fields, dropping serialization metadata.

use std::collections::HashMap;

use type_mapping::TypeTag;

use crate::errors::IntrospectionError;
use crate::traits::{FieldDescriptor, TabularRecord};

/// Serialization-version marker, never mapped to a column
pub const SERIAL_VERSION_FIELD: &str = "serial_version_uid";

fn is_serialization_marker(name: &str) -> bool {
    name.eq_ignore_ascii_case(SERIAL_VERSION_FIELD)
}

/// Usable fields of `R` in declaration order
pub fn describe<R: TabularRecord>() -> Result<Vec<FieldDescriptor>, IntrospectionError> {
    let fields: Vec<_> = R::describe_fields()
        .into_iter()
        .filter(|field| !is_serialization_marker(field.name))
        .collect();

    if fields.is_empty() {
        return Err(IntrospectionError::NoUsableFields {
            record: R::record_name().to_string(),
        });
    }

    Ok(fields)
}

/// Descriptors of one record type, computed once and looked up by name
#[derive(Debug, Clone)]
pub struct FieldIndex {
    record: &'static str,
    ordered: Vec<FieldDescriptor>,
    by_name: HashMap<&'static str, usize>,
}

impl FieldIndex {
    pub fn of<R: TabularRecord>() -> Result<Self, IntrospectionError> {
        let ordered = describe::<R>()?;
        let by_name = ordered
            .iter()
            .enumerate()
            .map(|(position, field)| (field.name, position))
            .collect();

        Ok(Self {
            record: R::record_name(),
            ordered,
            by_name,
        })
    }

    pub fn record_name(&self) -> &'static str {
        self.record
    }

    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.ordered
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.by_name.get(name).map(|&position| &self.ordered[position])
    }

    pub fn tag_of(&self, name: &str) -> Option<TypeTag> {
        self.get(name).map(|field| field.type_tag)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
