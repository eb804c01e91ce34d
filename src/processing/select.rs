//! Column projection for [`crate::types::Table`].

use crate::error::{SweepError, SweepResult};
use crate::types::{Schema, Table, Value};

/// Returns a new [`Table`] holding exactly `columns`, in the requested order.
///
/// A name requested twice yields one column at its first position. Any name the table does not
/// have fails with [`SweepError::UnknownColumn`]. Row count is preserved, even for an empty
/// selection. A row too short for a selected column yields [`Value::Null`] there.
pub fn select<S: AsRef<str>>(table: &Table, columns: &[S]) -> SweepResult<Table> {
    let mut idxs: Vec<usize> = Vec::with_capacity(columns.len());
    for name in columns {
        let name = name.as_ref();
        let idx = table
            .schema
            .index_of(name)
            .ok_or_else(|| SweepError::UnknownColumn {
                column: name.to_owned(),
                available: table.column_names(),
            })?;
        if !idxs.contains(&idx) {
            idxs.push(idx);
        }
    }

    let schema = Schema::new(
        idxs.iter()
            .map(|&i| table.schema.fields[i].clone())
            .collect(),
    );
    let rows = table
        .rows
        .iter()
        .map(|row| {
            idxs.iter()
                .map(|&i| row.get(i).cloned().unwrap_or(Value::Null))
                .collect()
        })
        .collect();

    Ok(Table { schema, rows })
}
