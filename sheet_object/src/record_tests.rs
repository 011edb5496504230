//! Writer/reader tests over derived record types

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::prelude::*;

#[record]
#[tabular(name = "Goods")]
struct Goods {
    goods_name: String,
    price: f64,
    created_at: NaiveDateTime,
}

#[record]
struct Brand {
    serial_version_uid: i64,
    name: String,
    first_char: String,
    rank: Option<i32>,
    #[field(skip)]
    cached_score: u32,
}

#[record]
struct Tagged {
    id: Uuid,
    active: bool,
    tags: Vec<String>,
}

#[record]
struct MarkerOnly {
    serial_version_uid: i64,
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

fn goods_alias() -> AliasTable {
    AliasTable::from_field_labels([
        ("goods_name", "Name"),
        ("price", "Price"),
        ("created_at", "Created"),
    ])
    .unwrap()
}

fn sample_goods() -> Vec<Goods> {
    vec![
        Goods {
            goods_name: "Pen".to_string(),
            price: 1.5,
            created_at: at(2023, 3, 1, 9, 5, 0),
        },
        Goods {
            goods_name: "Notebook".to_string(),
            price: 12.0,
            created_at: at(2024, 12, 31, 23, 59, 59),
        },
    ]
}

fn text(s: &str) -> Cell {
    Some(s.to_string())
}

#[test]
fn test_round_trip_with_alias() {
    let alias = goods_alias();
    let goods = sample_goods();

    let grid = write_records(&goods, Some(&alias), Some("Stock")).unwrap();
    let back: Vec<Goods> = read_records(&grid, Some(&alias)).unwrap();

    assert_eq!(back, goods);
}

#[test]
fn test_grid_layout() {
    let alias = goods_alias();
    let grid = write_records(&sample_goods(), Some(&alias), Some("Stock")).unwrap();

    assert_eq!(grid.row_count(), 4);
    assert_eq!(grid.title(), Some("Stock"));
    assert_eq!(grid.title_span(), 3);
    assert_eq!(
        grid.header().unwrap(),
        &[text("Name"), text("Price"), text("Created")]
    );
    assert_eq!(grid.cell(2, 0), Some("Pen"));
    assert_eq!(grid.cell(2, 1), Some("1.5"));
    assert_eq!(grid.cell(2, 2), Some("2023-03-01 09:05:00"));
    assert_eq!(grid.cell(3, 1), Some("12"));
}

#[test]
fn test_column_order_follows_alias() {
    let alias = AliasTable::from_field_labels([("created_at", "When"), ("goods_name", "What")]).unwrap();
    let grid = write_records(&sample_goods(), Some(&alias), None).unwrap();

    assert_eq!(grid.title(), Some("Goods"));
    assert_eq!(grid.header().unwrap(), &[text("When"), text("What")]);
    assert_eq!(grid.cell(3, 0), Some("2024-12-31 23:59:59"));
    assert_eq!(grid.cell(3, 1), Some("Notebook"));
}

#[test]
fn test_identity_alias_without_table() {
    let brands = vec![Brand {
        serial_version_uid: 42,
        name: "Acme".to_string(),
        first_char: "A".to_string(),
        rank: Some(3),
        cached_score: 99,
    }];

    let grid = write_records(&brands, None, None).unwrap();
    assert_eq!(grid.title(), Some("Brand"));
    assert_eq!(
        grid.header().unwrap(),
        &[text("name"), text("first_char"), text("rank")]
    );

    let back: Vec<Brand> = read_records(&grid, None).unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].name, "Acme");
    assert_eq!(back[0].rank, Some(3));
    // Neither the marker nor skipped fields travel through the grid
    assert_eq!(back[0].serial_version_uid, 0);
    assert_eq!(back[0].cached_score, 0);
}

#[test]
fn test_empty_input_writes_header_only() {
    let alias = goods_alias();
    let grid = write_records::<Goods>(&[], Some(&alias), None).unwrap();

    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.title(), Some("Goods"));

    let back: Vec<Goods> = read_records(&grid, Some(&alias)).unwrap();
    assert!(back.is_empty());
}

#[test]
fn test_bad_cell_leaves_field_default() {
    let alias = goods_alias();
    let grid = LogicalGrid::from_rows(vec![
        vec![text("Stock")],
        vec![text("Name"), text("Price"), text("Created")],
        vec![text("Pen"), text("abc"), text("2023-03-01 09:05:00")],
        vec![text("Ink"), text("2.25"), text("yesterday")],
    ]);

    let report: ReadReport<Goods> = read_records_detailed(&grid, Some(&alias)).unwrap();

    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].goods_name, "Pen");
    assert_eq!(report.records[0].price, 0.0);
    assert_eq!(report.records[0].created_at, at(2023, 3, 1, 9, 5, 0));
    assert_eq!(report.records[1].price, 2.25);
    assert_eq!(report.records[1].created_at, NaiveDateTime::default());

    assert_eq!(report.issues.len(), 2);
    assert_eq!(report.issues[0].row, 2);
    assert_eq!(report.issues[0].column, 1);
    assert_eq!(report.issues[0].field, "price");
    assert!(matches!(
        report.issues[0].error,
        CoercionError::InvalidDecimal { .. }
    ));
    assert_eq!(report.issues[1].label, "Created");
    assert!(matches!(
        report.issues[1].error,
        CoercionError::InvalidTemporal { .. }
    ));
    assert!(!report.is_clean());
}

#[test]
fn test_blank_and_missing_cells_are_skipped() {
    let alias = AliasTable::from_field_labels([("name", "Name"), ("rank", "Rank")]).unwrap();
    let grid = LogicalGrid::from_rows(vec![
        vec![text("Brands")],
        vec![text("Name"), text("Rank")],
        vec![text("Acme"), None],
        vec![text("Zeta"), text("  ")],
        vec![None, text("7")],
    ]);

    let report: ReadReport<Brand> = read_records_detailed(&grid, Some(&alias)).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.records[0].rank, None);
    assert_eq!(report.records[1].rank, None);
    assert_eq!(report.records[2].name, "");
    assert_eq!(report.records[2].rank, Some(7));
}

#[test]
fn test_unmapped_and_undeclared_columns_ignored() {
    let alias = AliasTable::from_field_labels([("name", "Name"), ("nickname", "Alias")]).unwrap();
    let grid = LogicalGrid::from_rows(vec![
        vec![text("Brands")],
        vec![text("Notes"), text("Name"), text("Alias")],
        vec![text("ignored"), text("Acme"), text("ACME Corp")],
    ]);

    let report: ReadReport<Brand> = read_records_detailed(&grid, Some(&alias)).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.records[0].name, "Acme");
}

#[test]
fn test_unknown_alias_field_writes_blank_cells() {
    let alias = AliasTable::from_field_labels([("name", "Name"), ("nickname", "Alias")]).unwrap();
    let brands = vec![Brand {
        name: "Acme".to_string(),
        ..Default::default()
    }];

    let grid = write_records(&brands, Some(&alias), None).unwrap();
    assert_eq!(grid.rows()[2], vec![text("Acme"), None]);
}

#[test]
fn test_later_duplicate_header_wins() {
    let alias = AliasTable::from_field_labels([("name", "Name")]).unwrap();
    let grid = LogicalGrid::from_rows(vec![
        vec![text("Brands")],
        vec![text("Name"), text("Name")],
        vec![text("first"), text("second")],
    ]);

    let back: Vec<Brand> = read_records(&grid, Some(&alias)).unwrap();
    assert_eq!(back[0].name, "second");
}

#[test]
fn test_other_fields_are_write_only() {
    let id = Uuid::new_v4();
    let rows = vec![Tagged {
        id,
        active: true,
        tags: vec!["a".to_string(), "b".to_string()],
    }];

    let grid = write_records(&rows, None, None).unwrap();
    let id_text = id.to_string();
    assert_eq!(grid.cell(2, 0), Some(id_text.as_str()));
    assert_eq!(grid.cell(2, 1), Some("true"));
    assert_eq!(grid.cell(2, 2), Some(r#"["a", "b"]"#));

    let report: ReadReport<Tagged> = read_records_detailed(&grid, None).unwrap();
    assert_eq!(report.records[0].id, id);
    assert!(report.records[0].active);
    assert!(report.records[0].tags.is_empty());
    assert_eq!(report.issues.len(), 1);
    assert_eq!(
        report.issues[0].error,
        CoercionError::Unsupported {
            type_tag: TypeTag::Other
        }
    );
}

#[test]
fn test_invalid_uuid_reported() {
    let grid = LogicalGrid::from_rows(vec![
        vec![text("Tagged")],
        vec![text("id"), text("active")],
        vec![text("not-a-uuid"), text("no")],
    ]);

    let report: ReadReport<Tagged> = read_records_detailed(&grid, None).unwrap();
    assert_eq!(report.records[0].id, Uuid::nil());
    assert!(!report.records[0].active);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].field, "id");
    assert!(matches!(
        report.issues[0].error,
        CoercionError::InvalidText { target: "Uuid", .. }
    ));
}

#[test]
fn test_marker_only_record_has_no_usable_fields() {
    let err = write_records::<MarkerOnly>(&[], None, None).unwrap_err();
    assert_eq!(
        err,
        SheetError::Introspection(IntrospectionError::NoUsableFields {
            record: "MarkerOnly".to_string()
        })
    );
    assert!(AliasTable::from_type::<MarkerOnly>().is_err());
}

#[test]
fn test_describe_excludes_marker() {
    let names: Vec<_> = crate::describe::<Brand>()
        .unwrap()
        .into_iter()
        .map(|field| field.name)
        .collect();
    assert_eq!(names, vec!["name", "first_char", "rank"]);

    let index = FieldIndex::of::<Goods>().unwrap();
    assert_eq!(index.record_name(), "Goods");
    assert_eq!(index.tag_of("created_at"), Some(TypeTag::Temporal));
    assert_eq!(index.tag_of("missing"), None);
}

#[test]
fn test_layout_errors() {
    let empty = LogicalGrid::from_rows(Vec::new());
    assert_eq!(
        read_records::<Goods>(&empty, None).unwrap_err(),
        SheetError::Layout(LayoutError::MissingTitleRow)
    );

    let title_only = LogicalGrid::from_rows(vec![vec![text("Goods")]]);
    assert_eq!(
        read_records::<Goods>(&title_only, None).unwrap_err(),
        SheetError::Layout(LayoutError::MissingHeaderRow { rows: 1 })
    );
}

#[test]
fn test_set_field_rejects_unknown_name() {
    let mut brand = Brand::default();
    assert_eq!(
        brand.set_field("nickname", FieldValue::Text("x".into())),
        Err(CoercionError::UnknownField("nickname".to_string()))
    );
    assert_eq!(brand.get_field("nickname"), None);
    assert_eq!(brand.get_field("rank"), Some(FieldValue::Null));
}
