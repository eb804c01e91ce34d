//! Core data model types.
//!
//! Every operation in this crate works on an in-memory [`Table`]: a [`Schema`] (an ordered list
//! of uniquely-named, typed [`Field`]s) plus row-aligned [`Value`] cells.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{SweepError, SweepResult};

/// Logical data type for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

impl DataType {
    /// Whether the column takes part in numeric operations (mean-fill, charting).
    ///
    /// Booleans are not numeric here.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int64 | Self::Float64)
    }
}

/// A single named, typed column in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Column name.
    pub name: String,
    /// Column data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// The ordered column list of a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A single typed cell in a [`Table`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Whether this cell is missing.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric view of the cell, if it holds a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int64(v) => Some(*v as f64),
            Self::Float64(v) => Some(*v),
            _ => None,
        }
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields. Every row has
/// exactly one cell per field; [`Table::try_new`] enforces it together with unique column names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from schema and rows.
    ///
    /// # Panics
    ///
    /// Panics if a row length differs from the schema field count or column names repeat. Use
    /// [`Table::try_new`] for untrusted input.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        match Self::try_new(schema, rows) {
            Ok(table) => table,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a table, validating column-name uniqueness and row alignment.
    pub fn try_new(schema: Schema, rows: Vec<Vec<Value>>) -> SweepResult<Self> {
        let mut seen = HashSet::with_capacity(schema.len());
        for name in schema.field_names() {
            if !seen.insert(name) {
                return Err(SweepError::SchemaMismatch {
                    message: format!("duplicate column name '{name}'"),
                });
            }
        }

        let expected = schema.len();
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(SweepError::SchemaMismatch {
                message: format!(
                    "row {idx} has {} cells but the schema has {expected} columns",
                    row.len()
                ),
            });
        }

        Ok(Self { schema, rows })
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the table.
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<String> {
        self.schema.field_names().map(str::to_owned).collect()
    }

    /// Iterate the cells of column `idx`, top to bottom.
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &Value> + '_ {
        self.rows.iter().filter_map(move |row| row.get(idx))
    }

    /// Iterate the cells of the named column, if it exists.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Value> + '_> {
        self.schema.index_of(name).map(|idx| self.column_values(idx))
    }

    /// A copy of the first `n` rows, for previews.
    pub fn head(&self, n: usize) -> Self {
        Self {
            schema: self.schema.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}
