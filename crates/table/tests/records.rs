use cellsplit_table::{CellValue, Dataset, TableError};
use indexmap::IndexMap;

fn record(pairs: &[(&str, CellValue)]) -> IndexMap<String, CellValue> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

#[test]
fn test_from_records_keeps_first_record_order() {
    let dataset = Dataset::from_records(vec![
        record(&[("TTS", "177 s 167 s".into()), ("CPU", "Apple M3 Max".into())]),
        record(&[("CPU", "Intel".into()), ("TTS", CellValue::Null)]),
    ])
    .unwrap();

    assert_eq!(dataset.columns(), &["TTS".to_string(), "CPU".to_string()]);
    assert_eq!(dataset.get(1, "CPU").unwrap().as_str(), "Intel");
    assert!(dataset.get(1, "TTS").unwrap().is_null());
}

#[test]
fn test_from_records_rejects_extra_keys() {
    let err = Dataset::from_records(vec![
        record(&[("A", "1".into())]),
        record(&[("A", "2".into()), ("B", "x".into())]),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        TableError::ColumnNotFound {
            name: "B".to_string()
        }
    );
}

#[test]
fn test_from_records_empty() {
    let dataset = Dataset::from_records(Vec::new()).unwrap();
    assert_eq!(dataset.col_count(), 0);
    assert!(dataset.is_empty());
}

#[test]
fn test_column_map_by_name() {
    let mut dataset = Dataset::from_columns([("A", vec!["x; y", "z"]), ("B", vec!["1", "2"])]).unwrap();
    dataset
        .column_map_by_name("A", |cell| CellValue::list(cell.as_str().split("; ")))
        .unwrap();

    assert_eq!(dataset.get(0, "A").unwrap(), &CellValue::list(["x", "y"]));
    assert_eq!(dataset.get(0, "B").unwrap(), &CellValue::from("1"));
    assert!(matches!(
        dataset.column_map_by_name("C", |cell| cell.clone()),
        Err(TableError::ColumnNotFound { .. })
    ));

    let exploded = dataset.explode("A").unwrap();
    assert_eq!(exploded.row_count(), 3);
    assert_eq!(exploded.get(2, "A").unwrap().as_str(), "z");
}
