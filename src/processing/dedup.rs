//! Duplicate-row removal for [`crate::types::Table`].

use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::mem;

use crate::types::{Table, Value};

/// Returns a new [`Table`] without rows that fully equal an earlier row.
///
/// The first occurrence is kept and kept rows stay in their original order. Two missing cells
/// compare equal, so a repeated row with gaps is still a duplicate. Applying this to its own
/// output returns an equal table.
pub fn remove_duplicates(table: &Table) -> Table {
    let mut seen: HashSet<RowKey<'_>> = HashSet::with_capacity(table.row_count());
    let rows: Vec<Vec<Value>> = table
        .rows
        .iter()
        .filter(|&row| seen.insert(RowKey(row)))
        .cloned()
        .collect();

    tracing::debug!(
        before = table.row_count(),
        after = rows.len(),
        "removed duplicate rows"
    );

    Table {
        schema: table.schema.clone(),
        rows,
    }
}

struct RowKey<'a>(&'a [Value]);

impl PartialEq for RowKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().zip(other.0).all(|(a, b)| same_value(a, b))
    }
}

impl Eq for RowKey<'_> {}

impl Hash for RowKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in self.0 {
            hash_value(value, state);
        }
    }
}

fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Float64(x), Value::Float64(y)) => x == y || (x.is_nan() && y.is_nan()),
        _ => a == b,
    }
}

// Must agree with `same_value`: 0.0 and -0.0 hash alike, every NaN hashes alike.
fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    mem::discriminant(value).hash(state);
    match value {
        Value::Null => {}
        Value::Int64(v) => v.hash(state),
        Value::Float64(v) => {
            let bits = if *v == 0.0 {
                0
            } else if v.is_nan() {
                f64::NAN.to_bits()
            } else {
                v.to_bits()
            };
            bits.hash(state);
        }
        Value::Bool(v) => v.hash(state),
        Value::Utf8(v) => v.hash(state),
    }
}
