//! CSV writer.

use crate::error::ExportFailure;
use crate::types::{Table, Value};

/// Write `table` as CSV: a header row, no index column, standard quoting.
///
/// Missing cells are empty fields; booleans are `True`/`False`; floats always carry a decimal
/// point or exponent so they read back as floats.
pub fn write_csv(table: &Table) -> Result<Vec<u8>, ExportFailure> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(table.schema.field_names())?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(format_value))?;
    }

    wtr.into_inner().map_err(|e| ExportFailure::Io(e.into_error()))
}

pub(crate) fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Int64(v) => v.to_string(),
        Value::Float64(v) => format_float(*v),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Utf8(s) => s.clone(),
    }
}

/// Shortest text that parses back to `v`, with a `.0` on integral values.
pub(crate) fn format_float(v: f64) -> String {
    if v.is_finite() {
        format!("{v:?}")
    } else if v.is_nan() {
        String::new()
    } else if v > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}
