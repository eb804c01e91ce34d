//! In-memory table transformations.
//!
//! The processing layer operates on [`crate::types::Table`] values produced by ingestion. Each
//! operation takes a table by reference and returns a new one, so steps compose in any order.
//!
//! Currently implemented:
//!
//! - [`remove_duplicates()`]: drop fully-repeated rows, keeping the first occurrence
//! - [`fill_missing_numeric()`]: replace gaps in numeric columns with the column mean
//! - [`select()`]: keep a caller-chosen list of columns
//! - [`bar_chart()`]: chart series for the first two numeric columns
//!
//! ## Example: dedupe → fill → select
//!
//! ```rust
//! use data_sweeper::processing::{fill_missing_numeric, remove_duplicates, select};
//! use data_sweeper::types::{DataType, Field, Schema, Table, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("n", DataType::Float64),
//!     Field::new("s", DataType::Utf8),
//! ]);
//! let table = Table::new(
//!     schema,
//!     vec![
//!         vec![Value::Float64(1.0), Value::Utf8("a".to_string())],
//!         vec![Value::Float64(2.0), Value::Utf8("b".to_string())],
//!         vec![Value::Float64(1.0), Value::Utf8("a".to_string())],
//!         vec![Value::Null, Value::Utf8("c".to_string())],
//!     ],
//! );
//!
//! let deduped = remove_duplicates(&table);
//! assert_eq!(deduped.row_count(), 3);
//!
//! let filled = fill_missing_numeric(&deduped);
//! assert_eq!(filled.rows[2][0], Value::Float64(1.5));
//!
//! let only_n = select(&filled, &["n"]).unwrap();
//! assert_eq!(only_n.column_names(), vec!["n"]);
//! ```

pub mod chart;
pub mod dedup;
pub mod fill;
pub mod select;

pub use chart::{ChartData, ChartSeries, bar_chart};
pub use dedup::remove_duplicates;
pub use fill::fill_missing_numeric;
pub use select::select;
