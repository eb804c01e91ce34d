//! `data-sweeper` ingests uploaded CSV/Excel files into an in-memory [`types::Table`], cleans
//! and projects them, and converts them to CSV or Excel for download. A separate path extracts
//! plain text from TXT, CSV, Excel and PDF files.
//!
//! The primary entrypoints are in [`pipeline`], which wrap the pure operations below and report
//! outcomes to an optional observer. Every operation is synchronous and works on owned values;
//! nothing is persisted.
//!
//! ## What you can ingest
//!
//! **File formats (detected strictly by extension, case-insensitive):**
//!
//! - **CSV**: `.csv`
//! - **Excel**: `.xlsx` (first sheet, first non-empty row as header)
//! - Text extraction additionally accepts **TXT** (`.txt`) and **PDF** (`.pdf`)
//!
//! **Value types:**
//!
//! Column types are inferred from the data. Supported logical types are:
//!
//! - [`types::DataType::Int64`]
//! - [`types::DataType::Float64`]
//! - [`types::DataType::Bool`]
//! - [`types::DataType::Utf8`]
//!
//! Empty cells and NA markers (`NA`, `NaN`, `null`, ...) map to [`types::Value::Null`]. An
//! integer column with a gap is read as `Float64`, and so is an entirely empty column.
//!
//! ## Quick example: clean and convert
//!
//! ```rust
//! use data_sweeper::export::ExportFormat;
//! use data_sweeper::pipeline::{SweepOptions, SweepPlan};
//! use data_sweeper::source::SourceFile;
//!
//! # fn main() -> Result<(), data_sweeper::SweepError> {
//! let file = SourceFile::new("scores.csv", "n,s\n1,a\n2,b\n1,a\n,c\n");
//! let plan = SweepPlan {
//!     remove_duplicates: true,
//!     fill_missing: true,
//!     columns: None,
//!     target: ExportFormat::Csv,
//! };
//!
//! let outcome = plan.run(&file, &SweepOptions::default())?;
//! assert_eq!(outcome.artifact.file_name, "scores.csv");
//! assert_eq!(outcome.artifact.bytes, b"n,s\n1.0,a\n2.0,b\n1.5,c\n");
//! # Ok(())
//! # }
//! ```
//!
//! ## Text extraction
//!
//! ```rust
//! use data_sweeper::pipeline::{extract, SweepOptions};
//! use data_sweeper::source::SourceFile;
//!
//! # fn main() -> Result<(), data_sweeper::SweepError> {
//! let file = SourceFile::new("notes.txt", "hello\nworld");
//! let extraction = extract(&file, &SweepOptions::default())?;
//! assert_eq!(extraction.text, "hello\nworld");
//! assert_eq!(extraction.artifact.file_name, "extracted_text.txt");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`pipeline`]: per-file sweep, batch processing, extraction entrypoints and options
//! - [`ingestion`]: format detection and CSV/Excel readers
//! - [`processing`]: deduplication, mean-fill, column selection, chart data
//! - [`export`]: CSV/Excel writers and download artifacts
//! - [`extract`]: plain-text extraction
//! - [`observability`]: observer trait and stock observers
//! - [`types`], [`source`]: data model and uploaded files
//! - [`error`]: error types used across the crate

pub mod error;
pub mod export;
pub mod extract;
pub mod ingestion;
pub mod observability;
pub mod pipeline;
pub mod processing;
pub mod source;
pub mod types;

pub use error::{SweepError, SweepResult};
