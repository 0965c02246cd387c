//! Library-level tests for type inference and script generation

use sheet2sql::csv_handler::CsvHandler;
use sheet2sql::error::SheetError;
use sheet2sql::script::ScriptGenerator;
use sheet2sql::table::{Cell, Table};
use sheet2sql::type_inference::{infer_type, ColumnType};

fn text_row(values: &[&str]) -> Vec<Cell> {
    values.iter().map(|v| Cell::from(*v)).collect()
}

#[test]
fn test_id_name_example() {
    let table = Table::from_rows(
        ["id", "name"],
        vec![text_row(&["1", "Alice"]), text_row(&["2", "O'Brien"])],
    )
    .unwrap();

    let script = ScriptGenerator::default().generate(&table).unwrap();
    let text = script.to_single_line();

    assert_eq!(
        text,
        "CREATE TABLE ExcelTable (    id INT,    name VARCHAR(512)); \
         INSERT INTO ExcelTable (id, name) VALUES ('1', 'Alice'); \
         INSERT INTO ExcelTable (id, name) VALUES ('2', 'O''Brien');"
    );
}

#[test]
fn test_null_position_matches_column() {
    let table = Table::from_rows(
        ["a", "b", "c", "d"],
        vec![vec![
            Cell::from("1"),
            Cell::from("x"),
            Cell::Missing,
            Cell::from("y"),
        ]],
    )
    .unwrap();

    let script = ScriptGenerator::default().generate(&table).unwrap();
    assert!(script.statements()[1].ends_with("VALUES ('1', 'x', NULL, 'y');"));
    assert!(!script.statements()[1].contains("'NULL'"));
}

#[test]
fn test_all_missing_column_is_text() {
    let table = Table::from_rows(
        ["id", "note"],
        vec![
            vec![Cell::from("1"), Cell::Missing],
            vec![Cell::from("2"), Cell::Missing],
        ],
    )
    .unwrap();

    let schema = ScriptGenerator::default().infer_schema(&table).unwrap();
    assert_eq!(schema[0].sql_type, ColumnType::Integer);
    assert_eq!(schema[1].sql_type, ColumnType::Text);
}

#[test]
fn test_inference_priority() {
    assert_eq!(infer_type(["10", "20", "-30"]), ColumnType::Integer);
    assert_eq!(infer_type(["10", "20.5"]), ColumnType::Decimal);
    assert_eq!(infer_type(["3000000000"]), ColumnType::NumericText);
    assert_eq!(infer_type(["10", "n/a"]), ColumnType::Text);
}

#[test]
fn test_joined_script_has_no_line_breaks() {
    let table = CsvHandler::default()
        .load_from_bytes(b"id,comment\n1,\"first\r\nsecond\"\n2,\"  padded  \"\n")
        .unwrap();

    let text = ScriptGenerator::default()
        .generate(&table)
        .unwrap()
        .to_single_line();

    assert!(!text.contains('\r'));
    assert!(!text.contains('\n'));
    assert!(text.contains("'firstsecond'"));
    assert!(text.contains("'  padded  '"));
}

#[test]
fn test_zero_columns_rejected() {
    let table = Table::new(Vec::new()).unwrap();
    let result = ScriptGenerator::default().generate(&table);
    assert!(matches!(result, Err(SheetError::NoColumns)));
}

#[test]
fn test_empty_sheet_rejected() {
    let table = CsvHandler::default().load_from_bytes(b"").unwrap();
    let err = ScriptGenerator::default().generate(&table).unwrap_err();
    assert!(err.is_input_shape());
    assert_eq!(err.to_string(), "Input error: table has no columns");
}

#[test]
fn test_generation_is_idempotent() {
    let table = CsvHandler::default()
        .load_from_bytes(b"id,price,label\n1,2.50,a\n2,,b\n")
        .unwrap();
    let generator = ScriptGenerator::new("prices");

    let first = generator.generate(&table).unwrap();
    let second = generator.generate(&table).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_single_line(), second.to_single_line());
}

#[test]
fn test_generated_script_parses() {
    let table = CsvHandler::default()
        .load_from_bytes(b"id,name,score\n1,Alice,9.5\n2,O'Brien,\n")
        .unwrap();
    let script = ScriptGenerator::default().generate(&table).unwrap();
    script.validate().unwrap();
}
