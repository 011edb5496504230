//! Trait definitions
//!
//! This module defines the record capability the engine works through.

pub mod tabular_record;

pub use tabular_record::{FieldDescriptor, TabularRecord};
