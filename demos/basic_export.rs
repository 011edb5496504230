//! # Basic Export Example
//!
//! This example demonstrates the fundamental concepts of SheetHaus:
//! - Defining records with the `#[record]` macro
//! - Exporting with the field names as column labels
//! - Overriding the title and adding a header note through configuration

use sheethaus::prelude::*;

/// A simple brand record
#[record]
#[tabular(name = "Brands")]
pub struct Brand {
    /// Serialization marker, never exported
    pub serial_version_uid: i64,

    pub name: String,
    pub first_char: String,

    /// Optional field - exported as a blank cell when absent
    pub rank: Option<i32>,
}

fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    println!("🚀 SheetHaus Basic Export Example");
    println!("=================================");

    let brands = vec![
        Brand {
            serial_version_uid: 1,
            name: "Acme".to_string(),
            first_char: "A".to_string(),
            rank: Some(1),
        },
        Brand {
            serial_version_uid: 1,
            name: "Zeta".to_string(),
            first_char: "Z".to_string(),
            rank: None,
        },
    ];

    // 1. Default configuration: identity labels, record name as title
    let sheethaus = SheetHaus::default();
    let path = std::env::temp_dir().join("sheethaus_brands.xlsx");
    sheethaus.export_to_path(&brands, None, None, &path)?;
    println!("✅ Wrote {} brands to {}", brands.len(), path.display());

    // 2. Custom configuration: sheet name, note on the header row
    let mut config = AppConfig::default();
    config.export.sheet_name = "Brands".to_string();
    config.export.header_note = Some(NoteConfig::new(
        "Labels are field names".to_string(),
        "sheethaus".to_string(),
    ));
    let annotated = SheetHaus::new(config)?;

    let bytes = annotated.export_to_table(&brands, None, Some("Brand ranking"))?;
    println!("✅ Rendered annotated workbook ({} bytes)", bytes.len());

    // 3. Read it back
    let back: Vec<Brand> = annotated.import_from_table(&bytes, None)?;
    for brand in &back {
        println!("   {} ({}) rank={:?}", brand.name, brand.first_char, brand.rank);
    }

    Ok(())
}
