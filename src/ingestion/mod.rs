//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`parse`], which:
//!
//! - detects the format strictly from the lowercase file-name extension (`.csv`, `.xlsx`)
//! - parses the bytes into an in-memory [`crate::types::Table`], inferring column types
//!
//! Format-specific functions are also available under [`csv`] and [`excel`].

pub mod csv;
pub mod excel;
pub mod infer;

use crate::error::{ParseFailure, SweepError, SweepResult};
use crate::source::{FileFormat, SourceFile};
use crate::types::Table;

/// Parse an uploaded tabular file into a [`Table`].
///
/// - `.csv` uses the comma-separated reader; `.xlsx` reads the first sheet.
/// - Any other extension fails with [`SweepError::UnsupportedFormat`].
/// - Malformed input fails with [`SweepError::ParseError`] carrying the reader's error.
///
/// ```
/// use data_sweeper::ingestion::parse;
/// use data_sweeper::source::SourceFile;
/// use data_sweeper::types::Value;
///
/// # fn main() -> Result<(), data_sweeper::SweepError> {
/// let file = SourceFile::new("people.csv", "id,name\n1,Ada\n2,Grace\n");
/// let table = parse(&file)?;
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.rows[1][1], Value::Utf8("Grace".to_string()));
/// # Ok(())
/// # }
/// ```
pub fn parse(file: &SourceFile) -> SweepResult<Table> {
    let format = tabular_format(file)?;
    parse_as(file, format)
}

/// The file's format, if the tabular pipeline accepts it.
pub fn tabular_format(file: &SourceFile) -> SweepResult<FileFormat> {
    match file.format()? {
        f if f.is_tabular() => Ok(f),
        _ => Err(SweepError::UnsupportedFormat {
            format: format!(".{}", file.extension().unwrap_or_default()),
        }),
    }
}

pub(crate) fn parse_as(file: &SourceFile, format: FileFormat) -> SweepResult<Table> {
    let result = match format {
        FileFormat::Csv => csv::ingest_csv_from_bytes(&file.bytes),
        FileFormat::Excel => excel::ingest_excel_from_bytes(&file.bytes),
        FileFormat::Text | FileFormat::Pdf => Err(ParseFailure::malformed(format!(
            "{format:?} is not a tabular format"
        ))),
    };

    result.map_err(|source| SweepError::ParseError {
        file_name: file.name.clone(),
        source,
    })
}
