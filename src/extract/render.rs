//! Fixed-width text rendering of a [`Table`].

use crate::types::{DataType, Table, Value};

const MAX_FLOAT_DECIMALS: usize = 6;

/// Render `table` as aligned text: one header line, then one line per row.
///
/// Columns are right-aligned and separated by a single space; there is no row index. Missing
/// cells print as `NaN`, and every float column shares one precision. A row too short for the
/// schema renders blanks in its missing positions.
pub fn render_table(table: &Table) -> String {
    if table.row_count() == 0 || table.column_count() == 0 {
        return format!(
            "Empty DataFrame\nColumns: [{}]\nIndex: []",
            table.column_names().join(", ")
        );
    }

    let columns: Vec<Vec<String>> = table
        .schema
        .fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let precision = match field.data_type {
                DataType::Float64 => float_precision(table.column_values(idx)),
                _ => 0,
            };
            std::iter::once(field.name.clone())
                .chain(table.rows.iter().map(|row| {
                    row.get(idx)
                        .map_or_else(String::new, |v| render_cell(v, precision))
                }))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .map(|cells| cells.iter().map(|c| c.chars().count()).max().unwrap_or(0))
        .collect();

    let lines: Vec<String> = (0..=table.row_count())
        .map(|line| {
            columns
                .iter()
                .zip(&widths)
                .map(|(cells, &w)| format!("{:>w$}", cells[line]))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    lines.join("\n")
}

fn render_cell(value: &Value, precision: usize) -> String {
    match value {
        Value::Null => "NaN".to_string(),
        Value::Int64(v) => v.to_string(),
        Value::Float64(v) if v.is_finite() => format!("{v:.precision$}"),
        Value::Float64(v) if v.is_nan() => "NaN".to_string(),
        Value::Float64(v) if *v > 0.0 => "inf".to_string(),
        Value::Float64(_) => "-inf".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Utf8(s) => s.clone(),
    }
}

/// Decimals needed by the most precise finite value, clamped to `1..=6`.
fn float_precision<'a>(values: impl Iterator<Item = &'a Value>) -> usize {
    values
        .filter_map(|v| match v {
            Value::Float64(f) if f.is_finite() => Some(decimals(*f)),
            _ => None,
        })
        .max()
        .unwrap_or(1)
        .clamp(1, MAX_FLOAT_DECIMALS)
}

fn decimals(f: f64) -> usize {
    let text = format!("{f}");
    text.split_once('.').map_or(0, |(_, frac)| frac.len())
}

#[cfg(test)]
mod tests {
    use super::render_table;
    use crate::types::{DataType, Field, Schema, Table, Value};

    #[test]
    fn aligns_columns_right() {
        let schema = Schema::new(vec![
            Field::new("n", DataType::Float64),
            Field::new("name", DataType::Utf8),
            Field::new("ok", DataType::Bool),
        ]);
        let table = Table::new(
            schema,
            vec![
                vec![Value::Float64(1.0), Value::Utf8("Ada".to_string()), Value::Bool(true)],
                vec![Value::Float64(12.25), Value::Utf8("Al".to_string()), Value::Bool(false)],
                vec![Value::Null, Value::Utf8("Grace".to_string()), Value::Null],
            ],
        );

        let expected = [
            "    n  name    ok",
            " 1.00   Ada  True",
            "12.25    Al False",
            "  NaN Grace   NaN",
        ]
        .join("\n");
        assert_eq!(render_table(&table), expected);
    }

    #[test]
    fn empty_tables_say_so() {
        let schema = Schema::new(vec![
            Field::new("a", DataType::Int64),
            Field::new("b", DataType::Utf8),
        ]);
        let table = Table::new(schema, vec![]);
        assert_eq!(
            render_table(&table),
            "Empty DataFrame\nColumns: [a, b]\nIndex: []"
        );
    }

    #[test]
    fn precision_is_capped() {
        let schema = Schema::new(vec![Field::new("x", DataType::Float64)]);
        let table = Table::new(schema, vec![vec![Value::Float64(0.123456789)]]);
        assert_eq!(render_table(&table), "       x\n0.123457");
    }

    #[test]
    fn short_rows_render_blank_cells() {
        let table = Table {
            schema: Schema::new(vec![
                Field::new("a", DataType::Int64),
                Field::new("b", DataType::Int64),
            ]),
            rows: vec![vec![Value::Int64(1)], vec![Value::Int64(3), Value::Int64(4)]],
        };
        assert_eq!(render_table(&table), "a b\n1  \n3 4");
    }
}
