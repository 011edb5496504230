//! # Batch Export Example
//!
//! Exports one workbook per day concurrently and writes them next to each
//! other in the temp directory.

use sheethaus::prelude::*;

#[record]
#[tabular(name = "Orders")]
pub struct Order {
    pub order_no: i64,
    pub customer: String,
    pub amount: f64,
    pub paid: bool,
}

fn day(start: i64, count: i64) -> Vec<Order> {
    (start..start + count)
        .map(|n| Order {
            order_no: n,
            customer: format!("customer-{}", n),
            amount: n as f64 * 9.5,
            paid: n % 2 == 0,
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let days = ["monday", "tuesday", "wednesday", "thursday", "friday"];
    let orders: Vec<Vec<Order>> = (0..days.len() as i64)
        .map(|i| day(i * 100, 20 + i))
        .collect();

    let jobs: Vec<ExportJob<'_, Order>> = orders
        .iter()
        .zip(days)
        .map(|(records, title)| ExportJob::new(records).with_title(title))
        .collect();

    let sheethaus = SheetHaus::default();
    let results = sheethaus.export_batch(&jobs, 4);

    for (name, result) in days.iter().zip(results) {
        let bytes = result?;
        let path = std::env::temp_dir().join(format!("sheethaus_orders_{}.xlsx", name));
        std::fs::write(&path, &bytes)?;
        println!("✅ {} → {} ({} bytes)", name, path.display(), bytes.len());
    }

    Ok(())
}
