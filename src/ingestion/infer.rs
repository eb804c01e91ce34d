//! Column type inference shared by the CSV and Excel readers.
//!
//! Readers turn each raw cell into a [`Cell`]; [`build_table`] then picks one [`DataType`] per
//! column and converts the cells into [`Value`]s.

use std::collections::HashSet;

use crate::error::ParseFailure;
use crate::types::{DataType, Field, Schema, Table, Value};

/// Text treated as a missing cell in CSV input.
pub const NA_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>", "#N/A",
    "#NA",
];

/// A raw cell with its source text kept for text columns.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Cell {
    Missing,
    Bool(bool, String),
    Int(i64, String),
    Float(f64, String),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Observed {
    Empty,
    Bool,
    Int,
    Float,
    Text,
}

impl Observed {
    fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Empty, o) | (o, Self::Empty) => o,
            (a, b) if a == b => a,
            (Self::Int, Self::Float) | (Self::Float, Self::Int) => Self::Float,
            _ => Self::Text,
        }
    }
}

impl Cell {
    /// Classify a CSV field.
    pub(crate) fn from_text(raw: &str) -> Self {
        if NA_MARKERS.contains(&raw) {
            return Self::Missing;
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        if let Ok(v) = trimmed.parse::<i64>() {
            return Self::Int(v, raw.to_owned());
        }
        if let Ok(v) = trimmed.parse::<f64>() {
            if v.is_nan() {
                return Self::Missing;
            }
            return Self::Float(v, raw.to_owned());
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "true" => Self::Bool(true, raw.to_owned()),
            "false" => Self::Bool(false, raw.to_owned()),
            _ => Self::Text(raw.to_owned()),
        }
    }

    fn observed(&self) -> Observed {
        match self {
            Self::Missing => Observed::Empty,
            Self::Bool(..) => Observed::Bool,
            Self::Int(..) => Observed::Int,
            Self::Float(..) => Observed::Float,
            Self::Text(_) => Observed::Text,
        }
    }

    fn into_value(self, data_type: DataType) -> Value {
        match (self, data_type) {
            (Self::Missing, _) => Value::Null,
            (Self::Int(v, _), DataType::Int64) => Value::Int64(v),
            (Self::Int(v, _), DataType::Float64) => Value::Float64(v as f64),
            (Self::Float(v, _), DataType::Float64) => Value::Float64(v),
            (Self::Bool(v, _), DataType::Bool) => Value::Bool(v),
            (Self::Int(_, raw) | Self::Float(_, raw) | Self::Bool(_, raw) | Self::Text(raw), _) => {
                Value::Utf8(raw)
            }
        }
    }
}

/// Pick the column type from the kinds of its non-missing cells.
///
/// An all-missing column is `Float64`; an integer column with a gap is `Float64` too.
fn resolve(observed: Observed, has_missing: bool) -> DataType {
    match observed {
        Observed::Empty | Observed::Float => DataType::Float64,
        Observed::Int if has_missing => DataType::Float64,
        Observed::Int => DataType::Int64,
        Observed::Bool => DataType::Bool,
        Observed::Text => DataType::Utf8,
    }
}

/// Blank header cells become `Unnamed: <index>`.
fn name_blank_headers(headers: Vec<String>) -> Vec<String> {
    headers
        .into_iter()
        .enumerate()
        .map(|(idx, h)| {
            if h.trim().is_empty() {
                format!("Unnamed: {idx}")
            } else {
                h
            }
        })
        .collect()
}

/// Make header names unique by suffixing repeats with `.1`, `.2`, ...
pub(crate) fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut out = Vec::with_capacity(headers.len());
    for header in headers {
        let mut name = header.clone();
        let mut n = 0;
        while taken.contains(&name) {
            n += 1;
            name = format!("{header}.{n}");
        }
        taken.insert(name.clone());
        out.push(name);
    }
    out
}

/// Infer column types and assemble a [`Table`].
///
/// Blank headers are named by position, then repeats are suffixed. `rows` shorter than
/// `headers` are padded with missing cells; longer rows are rejected.
pub(crate) fn build_table(
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
) -> Result<Table, ParseFailure> {
    let headers = dedupe_headers(name_blank_headers(headers));
    let width = headers.len();

    let mut observed = vec![Observed::Empty; width];
    let mut has_missing = vec![false; width];
    let mut padded: Vec<Vec<Cell>> = Vec::with_capacity(rows.len());

    for (idx0, mut row) in rows.into_iter().enumerate() {
        if row.len() > width {
            return Err(ParseFailure::malformed(format!(
                "data row {} has {} fields, expected {width}",
                idx0 + 1,
                row.len()
            )));
        }
        row.resize(width, Cell::Missing);
        for (col, cell) in row.iter().enumerate() {
            observed[col] = observed[col].merge(cell.observed());
            has_missing[col] |= matches!(cell, Cell::Missing);
        }
        padded.push(row);
    }

    let types: Vec<DataType> = observed
        .iter()
        .zip(&has_missing)
        .map(|(&o, &m)| resolve(o, m))
        .collect();

    let rows = padded
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(&types)
                .map(|(cell, &dt)| cell.into_value(dt))
                .collect()
        })
        .collect();

    let fields = headers
        .into_iter()
        .zip(types)
        .map(|(name, dt)| Field::new(name, dt))
        .collect();

    Ok(Table {
        schema: Schema::new(fields),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_rows(rows: &[&[&str]]) -> Vec<Vec<Cell>> {
        rows.iter()
            .map(|r| r.iter().map(|s| Cell::from_text(s)).collect())
            .collect()
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn classifies_csv_fields() {
        assert_eq!(Cell::from_text(""), Cell::Missing);
        assert_eq!(Cell::from_text("NaN"), Cell::Missing);
        assert_eq!(Cell::from_text(" 7 "), Cell::Int(7, " 7 ".to_string()));
        assert_eq!(Cell::from_text("1.5"), Cell::Float(1.5, "1.5".to_string()));
        assert_eq!(Cell::from_text("TRUE"), Cell::Bool(true, "TRUE".to_string()));
        assert_eq!(Cell::from_text(" hi "), Cell::Text(" hi ".to_string()));
    }

    #[test]
    fn integer_column_with_gap_becomes_float() {
        let table = build_table(
            headers(&["n", "m"]),
            text_rows(&[&["1", "1"], &["", "2"], &["3", "3"]]),
        )
        .unwrap();

        assert_eq!(table.schema.fields[0].data_type, DataType::Float64);
        assert_eq!(table.schema.fields[1].data_type, DataType::Int64);
        assert_eq!(
            table.rows[1],
            vec![Value::Null, Value::Int64(2)]
        );
        assert_eq!(table.rows[0][0], Value::Float64(1.0));
    }

    #[test]
    fn all_missing_column_is_float() {
        let table = build_table(headers(&["x"]), text_rows(&[&[""], &["NA"]])).unwrap();
        assert_eq!(table.schema.fields[0].data_type, DataType::Float64);
        assert_eq!(table.rows, vec![vec![Value::Null], vec![Value::Null]]);
    }

    #[test]
    fn mixed_column_keeps_source_text() {
        let table = build_table(
            headers(&["code"]),
            text_rows(&[&["007"], &["abc"], &["true"]]),
        )
        .unwrap();
        assert_eq!(table.schema.fields[0].data_type, DataType::Utf8);
        assert_eq!(table.rows[0][0], Value::Utf8("007".to_string()));
        assert_eq!(table.rows[2][0], Value::Utf8("true".to_string()));
    }

    #[test]
    fn short_rows_are_padded_and_long_rows_rejected() {
        let table = build_table(headers(&["a", "b"]), text_rows(&[&["x"]])).unwrap();
        assert_eq!(table.rows[0][1], Value::Null);

        let err = build_table(headers(&["a"]), text_rows(&[&["1", "2"]])).unwrap_err();
        assert!(err.to_string().contains("data row 1 has 2 fields, expected 1"));
    }

    #[test]
    fn repeated_headers_get_suffixes() {
        assert_eq!(
            dedupe_headers(headers(&["a", "a", "b", "a", "a.1"])),
            headers(&["a", "a.1", "b", "a.2", "a.1.1"])
        );
    }

    #[test]
    fn blank_headers_are_named_by_position() {
        let table = build_table(headers(&["", " ", "a"]), text_rows(&[&["0", "1", "x"]])).unwrap();
        assert_eq!(table.column_names(), vec!["Unnamed: 0", "Unnamed: 1", "a"]);
    }
}
