//! Excel (`.xlsx`) ingestion implementation.

use std::io::Cursor;

use calamine::{Data, ExcelDateTime, Range, Reader, Xlsx, open_workbook_from_rs};
use chrono::{Duration, NaiveTime};

use crate::error::ParseFailure;
use crate::types::Table;

use super::infer::{Cell, build_table};

/// Parse an `.xlsx` workbook into a [`Table`].
///
/// Behavior:
/// - Reads the first sheet in the workbook
/// - Uses the first non-empty row as the header row
/// - Converts the remaining rows into cells and infers column types
/// - Reads date cells as ISO text (`2024-01-15`, or `2024-01-15 08:30:00` when a time is set)
pub fn ingest_excel_from_bytes(bytes: &[u8]) -> Result<Table, ParseFailure> {
    let mut workbook: Xlsx<_> =
        open_workbook_from_rs(Cursor::new(bytes)).map_err(calamine::Error::Xlsx)?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(calamine::Error::Xlsx)?,
        None => return Err(ParseFailure::malformed("workbook has no sheets")),
    };

    ingest_sheet_range(&range)
}

fn ingest_sheet_range(range: &Range<Data>) -> Result<Table, ParseFailure> {
    let mut rows = range.rows();

    let header_row = rows
        .by_ref()
        .find(|row| row.iter().any(|c| !matches!(c, Data::Empty)))
        .ok_or_else(|| {
            ParseFailure::malformed("sheet has no non-empty rows (no header row found)")
        })?;

    let headers: Vec<String> = header_row.iter().map(cell_to_header_string).collect();

    let cells: Vec<Vec<Cell>> = rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    build_table(headers, cells)
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => (*f as i64).to_string(),
        Data::Empty => String::new(),
        Data::DateTime(dt) => date_text(dt),
        other => other.to_string(),
    }
}

fn convert_cell(c: &Data) -> Cell {
    match c {
        Data::Empty | Data::Error(_) => Cell::Missing,
        Data::String(s) if s.is_empty() => Cell::Missing,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Int(*i, i.to_string()),
        Data::Float(f) if f.is_nan() => Cell::Missing,
        Data::Float(f) if is_integral(*f) => Cell::Int(*f as i64, c.to_string()),
        Data::Float(f) => Cell::Float(*f, c.to_string()),
        Data::Bool(b) => Cell::Bool(*b, if *b { "True" } else { "False" }.to_string()),
        Data::DateTime(dt) => Cell::Text(date_text(dt)),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

fn date_text(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return match dt.as_duration() {
            Some(d) => duration_text(d),
            None => dt.as_f64().to_string(),
        };
    }
    match dt.as_datetime() {
        Some(ts) if ts.time() == NaiveTime::MIN => ts.format("%Y-%m-%d").to_string(),
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => dt.as_f64().to_string(),
    }
}

/// `1 days 02:30:00`
fn duration_text(d: Duration) -> String {
    let days = d.num_days();
    let secs = d.num_seconds() - days * 86_400;
    format!(
        "{days} days {:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

fn is_integral(f: f64) -> bool {
    f.fract() == 0.0 && f.abs() < 9.0e15
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;

    #[test]
    fn numbers_collapse_to_integers_when_integral() {
        assert_eq!(convert_cell(&Data::Float(3.0)), Cell::Int(3, "3".to_string()));
        assert!(matches!(convert_cell(&Data::Float(2.5)), Cell::Float(v, _) if v == 2.5));
        assert_eq!(convert_cell(&Data::Empty), Cell::Missing);
        assert_eq!(
            convert_cell(&Data::String("7".to_string())),
            Cell::Text("7".to_string())
        );
    }

    #[test]
    fn header_is_the_first_non_empty_row() {
        let mut range: Range<Data> = Range::new((0, 0), (2, 1));
        range.set_value((1, 0), Data::String("id".to_string()));
        range.set_value((1, 1), Data::String(String::new()));
        range.set_value((2, 0), Data::Float(7.0));
        range.set_value((2, 1), Data::String("x".to_string()));

        let table = ingest_sheet_range(&range).unwrap();
        assert_eq!(table.column_names(), vec!["id", "Unnamed: 1"]);
        assert_eq!(table.rows, vec![vec![Value::Int64(7), Value::Utf8("x".to_string())]]);
    }

    #[test]
    fn all_empty_sheet_has_no_header() {
        let range: Range<Data> = Range::new((0, 0), (1, 1));
        let err = ingest_sheet_range(&range).unwrap_err();
        assert!(err.to_string().contains("no header row"));
    }

    #[test]
    fn iso_date_strings_stay_verbatim() {
        assert_eq!(
            convert_cell(&Data::DateTimeIso("2024-01-15T08:30:00".to_string())),
            Cell::Text("2024-01-15T08:30:00".to_string())
        );
        assert_eq!(duration_text(Duration::seconds(93_600 + 1800)), "1 days 02:30:00");
    }

    #[test]
    fn garbage_bytes_are_an_excel_error() {
        let err = ingest_excel_from_bytes(b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, ParseFailure::Excel(_)));
    }
}
