//! Error types for the SheetHaus crate
//!
//! This module contains all error types that can be returned by SheetHaus operations.

use config::ConfigError;
use render_system::RenderError;
use sheet_object::{AliasError, IntrospectionError, LayoutError, SheetError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetHausError {
    #[error("Mapping error: {0}")]
    Sheet(#[from] SheetError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<IntrospectionError> for SheetHausError {
    fn from(err: IntrospectionError) -> Self {
        SheetHausError::Sheet(err.into())
    }
}

impl From<AliasError> for SheetHausError {
    fn from(err: AliasError) -> Self {
        SheetHausError::Sheet(err.into())
    }
}

impl From<LayoutError> for SheetHausError {
    fn from(err: LayoutError) -> Self {
        SheetHausError::Sheet(err.into())
    }
}
