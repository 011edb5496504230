//! Integration tests for concurrent batch export

use sheethaus::prelude::*;

#[record]
#[tabular(name = "Orders")]
pub struct Order {
    pub order_no: i64,
    pub customer: String,
    pub amount: f64,
}

fn orders(start: i64, count: i64) -> Vec<Order> {
    (start..start + count)
        .map(|n| Order {
            order_no: n,
            customer: format!("customer-{}", n),
            amount: n as f64 * 1.25,
        })
        .collect()
}

#[test]
fn test_batch_results_keep_job_order() {
    let sheethaus = SheetHaus::default();
    let monday = orders(1, 3);
    let tuesday = orders(100, 5);
    let wednesday: Vec<Order> = Vec::new();

    let jobs = vec![
        ExportJob::new(&monday).with_title("Monday"),
        ExportJob::new(&tuesday).with_title("Tuesday"),
        ExportJob::new(&wednesday),
    ];

    let results = sheethaus.export_batch(&jobs, 4);
    assert_eq!(results.len(), 3);

    let expected = [(&monday, "Monday"), (&tuesday, "Tuesday"), (&wednesday, "Orders")];
    for (result, (records, title)) in results.into_iter().zip(expected) {
        let bytes = result.unwrap();
        let grid = sheethaus.renderer().parse_bytes(&bytes).unwrap();
        assert_eq!(grid.title(), Some(title));

        let back: Vec<Order> = sheethaus.import_from_table(&bytes, None).unwrap();
        assert_eq!(&back, records);
    }
}

#[test]
fn test_batch_with_alias_and_single_worker() {
    let sheethaus = SheetHaus::default();
    let alias = AliasTable::from_field_labels([("order_no", "No."), ("amount", "Amount")]).unwrap();
    let data = orders(1, 2);

    let jobs = vec![
        ExportJob::new(&data).with_alias(&alias),
        ExportJob::new(&data).with_alias(&alias),
    ];

    let results = sheethaus.export_batch(&jobs, 1);
    assert_eq!(results.len(), 2);
    for result in results {
        let back: Vec<Order> = sheethaus
            .import_from_table(&result.unwrap(), Some(&alias))
            .unwrap();
        assert_eq!(back[1].order_no, 2);
        assert_eq!(back[1].amount, 2.5);
        assert_eq!(back[1].customer, "");
    }
}

#[test]
fn test_batch_job_without_columns_cannot_be_imported() {
    let sheethaus = SheetHaus::default();
    let data = orders(1, 1);
    let narrow = AliasTable::from_field_labels([("order_no", "No.")]).unwrap();
    let empty = AliasTable::from_explicit(Vec::<(String, String)>::new()).unwrap();

    let jobs = vec![
        ExportJob::new(&data).with_alias(&narrow),
        ExportJob::new(&data).with_alias(&empty),
    ];

    let mut results = sheethaus.export_batch(&jobs, 2).into_iter();
    let narrow_bytes = results.next().unwrap().unwrap();
    let empty_bytes = results.next().unwrap().unwrap();

    let back: Vec<Order> = sheethaus
        .import_from_table(&narrow_bytes, Some(&narrow))
        .unwrap();
    assert_eq!(back[0].order_no, 1);

    let err = sheethaus
        .import_from_table::<Order>(&empty_bytes, Some(&empty))
        .unwrap_err();
    assert!(matches!(
        err,
        SheetHausError::Sheet(SheetError::Layout(LayoutError::MissingHeaderRow { rows: 1 }))
    ));
}

#[test]
fn test_jobs_copy_without_copy_records() {
    let sheethaus = SheetHaus::default();
    let data = orders(7, 2);
    let job = ExportJob::new(&data).with_title("Repeated");
    let jobs = [job, job];

    for result in sheethaus.export_batch(&jobs, 2) {
        let back: Vec<Order> = sheethaus.import_from_table(&result.unwrap(), None).unwrap();
        assert_eq!(back, data);
    }
}
