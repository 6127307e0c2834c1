use cellsplit_markdown::{dataset_from_markdown, datasets_from_markdown, MarkdownTables};
use cellsplit_table::CellValue;

#[test]
fn markdown_table_extracts_headers_and_rows() {
    let md = r#"| CPU | TTS |
| --- | --- |
| Apple M3 Max (16 cores) | 177 s 167 s |
| Intel Xeon E5-2690 | 375 s |"#;

    let tables = MarkdownTables::from_markdown(md).expect("parse markdown");
    assert_eq!(tables.tables.len(), 1);
    let table = &tables.tables[0];

    assert_eq!(table.headers, vec!["CPU", "TTS"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["Apple M3 Max (16 cores)", "177 s 167 s"]);
}

#[test]
fn markdown_table_to_dataset() {
    let md = r#"| A | B |
| --- | --- |
| 1 | 2 |"#;

    let dataset = dataset_from_markdown(md).expect("extract table");
    assert_eq!(dataset.columns(), &["A".to_string(), "B".to_string()]);
    assert_eq!(dataset.row_count(), 1);
    assert_eq!(dataset.get(0, "B").unwrap(), &CellValue::from("2"));
}

#[test]
fn blank_cells_and_headers() {
    let md = r#"|   | Value |
|---|-------|
| 0 |       |
| 1 | x     |"#;

    let datasets = datasets_from_markdown(md).expect("extract tables");
    let dataset = &datasets[0];
    assert_eq!(dataset.columns()[0], "column_1");
    assert!(dataset.get(0, "Value").unwrap().is_null());
    assert_eq!(dataset.get(1, "Value").unwrap().as_str(), "x");
}
