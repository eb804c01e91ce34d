//! `.xlsx` writer.

use rust_xlsxwriter::Workbook;

use crate::error::ExportFailure;
use crate::types::{Table, Value};

/// Name of the single worksheet in exported workbooks.
pub const SHEET_NAME: &str = "Sheet1";

/// Write `table` as a single-sheet workbook: a header row, no index column.
///
/// Numbers are written as numbers, booleans as booleans, text as strings; missing cells stay
/// blank. Non-finite floats have no Excel representation and fail the export.
pub fn write_xlsx(table: &Table) -> Result<Vec<u8>, ExportFailure> {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name(SHEET_NAME)?;

    for (col, name) in table.schema.field_names().enumerate() {
        ws.write_string(0, col_index(col)?, name)?;
    }

    for (idx0, row) in table.rows.iter().enumerate() {
        // Header occupies row 0.
        let xl_row = u32::try_from(idx0 + 1).map_err(|_| ExportFailure::UnsupportedCell {
            row: idx0,
            column: String::new(),
            message: "row index exceeds the worksheet limit".to_string(),
        })?;

        for (col, value) in row.iter().enumerate() {
            let xl_col = col_index(col)?;
            match value {
                Value::Null => {}
                Value::Int64(v) => {
                    ws.write_number(xl_row, xl_col, *v as f64)?;
                }
                Value::Float64(v) if v.is_finite() => {
                    ws.write_number(xl_row, xl_col, *v)?;
                }
                Value::Float64(v) => {
                    return Err(ExportFailure::UnsupportedCell {
                        row: idx0,
                        column: table.schema.fields[col].name.clone(),
                        message: format!("{v} has no spreadsheet representation"),
                    });
                }
                Value::Bool(v) => {
                    ws.write_boolean(xl_row, xl_col, *v)?;
                }
                Value::Utf8(v) => {
                    ws.write_string(xl_row, xl_col, v)?;
                }
            }
        }
    }

    Ok(wb.save_to_buffer()?)
}

fn col_index(col: usize) -> Result<u16, ExportFailure> {
    u16::try_from(col).map_err(|_| ExportFailure::UnsupportedCell {
        row: 0,
        column: col.to_string(),
        message: "column index exceeds the worksheet limit".to_string(),
    })
}
