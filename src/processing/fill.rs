//! Mean imputation for numeric columns.

use crate::types::{DataType, Table, Value};

/// Returns a new [`Table`] where missing cells of numeric columns hold the column mean.
///
/// - The mean is computed over the non-missing cells of each column at call time. A `NaN`
///   float counts as missing.
/// - A column with no missing cell, or any non-numeric column, is left untouched.
/// - A column with no non-missing cell stays as-is: its mean is undefined.
/// - An [`DataType::Int64`] column that receives a fill becomes [`DataType::Float64`].
pub fn fill_missing_numeric(table: &Table) -> Table {
    let mut out = table.clone();

    for idx in 0..out.schema.len() {
        let data_type = out.schema.fields[idx].data_type;
        if !data_type.is_numeric() {
            continue;
        }

        let (sum, count, missing) = out.column_values(idx).fold(
            (0.0_f64, 0_usize, 0_usize),
            |(sum, count, missing), v| match v.as_f64() {
                Some(x) if x.is_nan() => (sum, count, missing + 1),
                Some(x) => (sum + x, count + 1, missing),
                None if v.is_null() => (sum, count, missing + 1),
                None => (sum, count, missing),
            },
        );
        if missing == 0 || count == 0 {
            continue;
        }
        let mean = sum / count as f64;

        if data_type == DataType::Int64 {
            out.schema.fields[idx].data_type = DataType::Float64;
        }
        for row in &mut out.rows {
            let filled = match &row[idx] {
                Value::Null => Value::Float64(mean),
                Value::Float64(v) if v.is_nan() => Value::Float64(mean),
                Value::Int64(v) => Value::Float64(*v as f64),
                _ => continue,
            };
            row[idx] = filled;
        }

        tracing::debug!(
            column = %out.schema.fields[idx].name,
            mean,
            filled = missing,
            "filled missing numeric cells"
        );
    }

    out
}
