use data_sweeper::SweepError;
use data_sweeper::error::ParseFailure;
use data_sweeper::export::{ExportFormat, export};
use data_sweeper::extract::extract_text;
use data_sweeper::ingestion::parse;
use data_sweeper::source::SourceFile;
use data_sweeper::types::{DataType, Value};

fn people_xlsx(id_as_string: bool) -> Vec<u8> {
    use rust_xlsxwriter::Workbook;

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("Sheet1").unwrap();

    // header
    ws.write_string(0, 0, "id").unwrap();
    ws.write_string(0, 1, "name").unwrap();
    ws.write_string(0, 2, "score").unwrap();
    ws.write_string(0, 3, "active").unwrap();

    // row 1
    if id_as_string {
        ws.write_string(1, 0, "1").unwrap();
    } else {
        ws.write_number(1, 0, 1).unwrap();
    }
    ws.write_string(1, 1, "Ada").unwrap();
    ws.write_number(1, 2, 98.5).unwrap();
    ws.write_boolean(1, 3, true).unwrap();

    // row 2: score left blank
    if id_as_string {
        ws.write_string(2, 0, "2").unwrap();
    } else {
        ws.write_number(2, 0, 2).unwrap();
    }
    ws.write_string(2, 1, "Grace").unwrap();
    ws.write_boolean(2, 3, false).unwrap();

    wb.save_to_buffer().unwrap()
}

fn two_sheet_xlsx() -> Vec<u8> {
    use rust_xlsxwriter::Workbook;

    let mut wb = Workbook::new();

    let ws1 = wb.add_worksheet();
    ws1.set_name("First").unwrap();
    ws1.write_string(0, 0, "id").unwrap();
    ws1.write_number(1, 0, 1).unwrap();

    let ws2 = wb.add_worksheet();
    ws2.set_name("Second").unwrap();
    ws2.write_string(0, 0, "other").unwrap();
    ws2.write_number(1, 0, 99).unwrap();
    ws2.write_number(2, 0, 100).unwrap();

    wb.save_to_buffer().unwrap()
}

#[test]
fn parse_excel_happy_path() {
    let file = SourceFile::new("people.XLSX", people_xlsx(false));
    let table = parse(&file).unwrap();

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column_names(), vec!["id", "name", "score", "active"]);
    assert_eq!(table.schema.fields[0].data_type, DataType::Int64);
    assert_eq!(table.schema.fields[2].data_type, DataType::Float64);
    assert_eq!(table.schema.fields[3].data_type, DataType::Bool);
    assert_eq!(table.rows[0][0], Value::Int64(1));
    assert_eq!(table.rows[0][1], Value::Utf8("Ada".to_string()));
    assert_eq!(table.rows[1][2], Value::Null);
    assert_eq!(table.rows[1][3], Value::Bool(false));
}

#[test]
fn string_cells_stay_text() {
    let file = SourceFile::new("people.xlsx", people_xlsx(true));
    let table = parse(&file).unwrap();
    assert_eq!(table.schema.fields[0].data_type, DataType::Utf8);
    assert_eq!(table.rows[0][0], Value::Utf8("1".to_string()));
}

#[test]
fn only_the_first_sheet_is_read() {
    let file = SourceFile::new("multi.xlsx", two_sheet_xlsx());
    let table = parse(&file).unwrap();
    assert_eq!(table.column_names(), vec!["id"]);
    assert_eq!(table.rows, vec![vec![Value::Int64(1)]]);
}

#[test]
fn corrupt_workbook_is_a_parse_error() {
    let file = SourceFile::new("corrupt.xlsx", b"PK\x03\x04 truncated".to_vec());
    let err = parse(&file).unwrap_err();
    match err {
        SweepError::ParseError { file_name, source } => {
            assert_eq!(file_name, "corrupt.xlsx");
            assert!(matches!(source, ParseFailure::Excel(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn dates_xlsx() -> Vec<u8> {
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    let day = Format::new().set_num_format("yyyy-mm-dd");
    let stamp = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

    ws.write_string(0, 0, "when").unwrap();
    ws.write_string(0, 1, "at").unwrap();
    let date = ExcelDateTime::from_ymd(2024, 1, 15).unwrap();
    let evening = ExcelDateTime::from_ymd(2024, 1, 15)
        .unwrap()
        .and_hms(18, 0, 0)
        .unwrap();
    ws.write_datetime_with_format(1, 0, &date, &day).unwrap();
    ws.write_datetime_with_format(1, 1, &evening, &stamp).unwrap();

    wb.save_to_buffer().unwrap()
}

#[test]
fn date_cells_are_read_as_iso_text() {
    let file = SourceFile::new("dates.xlsx", dates_xlsx());
    let table = parse(&file).unwrap();

    assert_eq!(table.schema.fields[0].data_type, DataType::Utf8);
    assert_eq!(
        table.rows,
        vec![vec![
            Value::Utf8("2024-01-15".to_string()),
            Value::Utf8("2024-01-15 18:00:00".to_string()),
        ]]
    );

    let text = extract_text(&file).unwrap();
    assert_eq!(text, "      when                  at\n2024-01-15 2024-01-15 18:00:00");

    let csv = export(&table, &file.name, ExportFormat::Csv).unwrap();
    assert_eq!(csv.bytes, b"when,at\n2024-01-15,2024-01-15 18:00:00\n");
}
