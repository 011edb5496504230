//! # Configuration Management for SheetHaus
//!
//! This crate provides centralized configuration structures for all SheetHaus components,
//! including export layout, import options, and the cell styles handed to the renderer.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{AppConfig, ExportConfig, NoteConfig};
//!
//! let mut config = AppConfig::default();
//! config.export = ExportConfig::new("Brands".to_string(), None, true, None);
//! config.export.header_note = Some(NoteConfig::new("Exported nightly".to_string(), "ops".to_string()));
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [export]
//! sheet_name = "Sheet1"
//! default_title = "Brands"
//! autofit_columns = true
//!
//! [export.header_note]
//! text = "Exported nightly"
//! author = "ops"
//!
//! [import]
//! sheet_index = 0
//!
//! [styles.title]
//! font_name = "SimSun"
//! font_size = 20.0
//! bold = true
//! italic = false
//! font_color = 0x000000
//! border = true
//! align = "center"
//! ```
//!
//! Load configuration:
//! ```rust,ignore
//! use config::AppConfig;
//!
//! // Load from sheethaus.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./sheethaus.toml";
const CONFIG_PATH_ENV: &str = "SHEETHAUS_CONFIG";

/// Excel worksheet name maximum length.
pub const MAX_SHEET_NAME_LEN: usize = 31;
/// Characters not allowed in sheet names.
pub const ILLEGAL_SHEET_NAME_CHARS: [char; 7] = ['*', ':', '?', '/', '\\', '[', ']'];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub export: ExportConfig,
    pub import: ImportConfig,
    pub styles: StyleConfig,
}

/// Export layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub sheet_name: String,
    /// Title used when the caller passes none; falls back to the record name
    pub default_title: Option<String>,
    pub autofit_columns: bool,
    pub header_note: Option<NoteConfig>,
}

/// Comment attached to the first header cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteConfig {
    pub text: String,
    pub author: String,
}

/// Import configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Zero-based worksheet to read
    pub sheet_index: usize,
}

/// Styles for the three row kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub title: CellStyleConfig,
    pub header: CellStyleConfig,
    pub data: CellStyleConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Font, alignment and border of one row kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellStyleConfig {
    pub font_name: String,
    pub font_size: f64,
    pub bold: bool,
    pub italic: bool,
    /// RGB, e.g. 0x800000
    pub font_color: u32,
    pub border: bool,
    pub align: HorizontalAlign,
}

/// An unset variable means "not configured"; an unreadable one is an error
fn env_config_path(var: Result<String, env::VarError>) -> Result<Option<String>, ConfigError> {
    match var {
        Ok(path) => Ok(Some(path)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl AppConfig {
    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config = {
            // A missing .env file is fine, a malformed one is not
            if let Err(e) = dotenvy::dotenv() {
                if !e.not_found() {
                    return Err(e.into());
                }
            }

            // Try the path named by SHEETHAUS_CONFIG
            if let Some(config_path) = env_config_path(env::var(CONFIG_PATH_ENV))? {
                Self::from_file(&config_path)
            }
            // Try to load config from DEFAULT_CONFIG_PATH
            else if Path::new(DEFAULT_CONFIG_PATH).exists() {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            // Return error if neither .env file nor default config file exists
            else {
                Err(ConfigError::Invalid(format!(
                    "Config path must be specified in .env file as {} or in {} file",
                    CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH
                )))
            }
        }?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Export validations
        let sheet_name = &self.export.sheet_name;
        if sheet_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Export sheet_name cannot be empty".to_string(),
            ));
        }
        if sheet_name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(ConfigError::Invalid(format!(
                "Export sheet_name '{}' is longer than {} characters",
                sheet_name, MAX_SHEET_NAME_LEN
            )));
        }
        if let Some(c) = sheet_name.chars().find(|c| ILLEGAL_SHEET_NAME_CHARS.contains(c)) {
            return Err(ConfigError::Invalid(format!(
                "Export sheet_name '{}' contains illegal character '{}'",
                sheet_name, c
            )));
        }
        if sheet_name.starts_with('\'') || sheet_name.ends_with('\'') {
            return Err(ConfigError::Invalid(format!(
                "Export sheet_name '{}' cannot start or end with an apostrophe",
                sheet_name
            )));
        }
        if let Some(note) = &self.export.header_note {
            if note.text.is_empty() {
                return Err(ConfigError::Invalid(
                    "Export header_note text cannot be empty".to_string(),
                ));
            }
        }

        // Style validations
        for (kind, style) in [
            ("title", &self.styles.title),
            ("header", &self.styles.header),
            ("data", &self.styles.data),
        ] {
            if style.font_name.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "Style {} font_name cannot be empty",
                    kind
                )));
            }
            if !(style.font_size > 0.0 && style.font_size <= 409.0) {
                return Err(ConfigError::Invalid(format!(
                    "Style {} font_size must be between 0 and 409, got {}",
                    kind, style.font_size
                )));
            }
            if style.font_color > 0xFF_FFFF {
                return Err(ConfigError::Invalid(format!(
                    "Style {} font_color {:#x} is not a 24-bit RGB value",
                    kind, style.font_color
                )));
            }
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
            default_title: None,
            autofit_columns: true,
            header_note: None,
        }
    }
}

impl ExportConfig {
    /// Create a new export configuration
    pub fn new(
        sheet_name: String,
        default_title: Option<String>,
        autofit_columns: bool,
        header_note: Option<NoteConfig>,
    ) -> Self {
        Self {
            sheet_name,
            default_title,
            autofit_columns,
            header_note,
        }
    }
}

impl NoteConfig {
    /// Create a new header note
    pub fn new(text: String, author: String) -> Self {
        Self { text, author }
    }
}

impl ImportConfig {
    /// Create a new import configuration
    pub fn new(sheet_index: usize) -> Self {
        Self { sheet_index }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            title: CellStyleConfig::new("SimSun".to_string(), 20.0, true, 0x000000),
            header: CellStyleConfig::new("Times New Roman".to_string(), 15.0, true, 0x800000),
            data: CellStyleConfig::new("SimSun".to_string(), 11.0, false, 0x000000),
        }
    }
}

impl Default for CellStyleConfig {
    fn default() -> Self {
        Self::new("Calibri".to_string(), 11.0, false, 0x000000)
    }
}

impl CellStyleConfig {
    /// Create a centered, bordered, upright cell style
    pub fn new(font_name: String, font_size: f64, bold: bool, font_color: u32) -> Self {
        Self {
            font_name,
            font_size,
            bold,
            italic: false,
            font_color,
            border: true,
            align: HorizontalAlign::Center,
        }
    }
}
