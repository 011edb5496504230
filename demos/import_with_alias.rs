//! # Import With Alias Example
//!
//! Exports goods under Chinese column labels, then imports them with an alias
//! table that only knows some of the labels, and shows the per-field report
//! for a cell that cannot be converted.

use std::io::Cursor;

use sheethaus::prelude::*;

#[record]
#[tabular(name = "Goods")]
pub struct Goods {
    pub goods_name: String,
    pub price: f64,
    pub stock: u32,
    pub created_at: NaiveDateTime,
}

fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    println!("🚀 SheetHaus Import Example");
    println!("===========================");

    let alias = AliasTable::from_field_labels([
        ("goods_name", "商品名称"),
        ("price", "价格"),
        ("stock", "库存"),
        ("created_at", "上架时间"),
    ])?;

    let created_at = NaiveDate::from_ymd_opt(2023, 3, 1)
        .and_then(|date| date.and_hms_opt(9, 5, 0))
        .unwrap_or_default();

    let goods = vec![
        Goods {
            goods_name: "钢笔".to_string(),
            price: 19.99,
            stock: 12,
            created_at,
        },
        Goods {
            goods_name: "笔记本".to_string(),
            price: 4.5,
            stock: 0,
            created_at,
        },
    ];

    let sheethaus = SheetHaus::default();
    let bytes = sheethaus.export_to_table(&goods, Some(&alias), Some("商品清单"))?;
    println!("✅ Exported {} goods", goods.len());

    // Full alias: everything comes back
    let back: Vec<Goods> = sheethaus.import_from_table(&bytes, Some(&alias))?;
    assert_eq!(back, goods);
    println!("✅ Round trip preserved every field");

    // Partial alias: unknown labels are ignored
    let names_only = AliasTable::from_explicit([("商品名称", "goods_name")])?;
    let names: Vec<Goods> = sheethaus.import_from_table(&bytes, Some(&names_only))?;
    for item in &names {
        println!("   {} (price left at {})", item.goods_name, item.price);
    }

    // A hand-edited cell that no longer parses
    let mut grid = sheethaus.to_grid(&goods, Some(&alias), None)?;
    grid = edit_cell(grid, 2, 2, "a dozen");
    let edited = sheethaus.renderer().render_to_bytes(&grid)?;

    let report: ReadReport<Goods> = sheethaus.import_report(Cursor::new(edited), Some(&alias))?;
    for issue in &report.issues {
        println!(
            "⚠️  row {} column '{}' ({}): {}",
            issue.row, issue.label, issue.field, issue.error
        );
    }

    Ok(())
}

fn edit_cell(grid: LogicalGrid, row: usize, column: usize, text: &str) -> LogicalGrid {
    let mut rows = grid.rows().to_vec();
    if let Some(cell) = rows.get_mut(row).and_then(|cells| cells.get_mut(column)) {
        *cell = Some(text.to_string());
    }
    LogicalGrid::from_rows(rows)
}
