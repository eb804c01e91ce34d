//! Serialize a [`Table`] into a downloadable artifact.
//!
//! [`export`] writes CSV or Excel bytes and derives the download name from the source file name:
//! `sales.xlsx` exported to CSV becomes `sales.csv`.

pub mod csv;
pub mod excel;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{SweepError, SweepResult};
use crate::source::file_stem;
use crate::types::Table;

/// MIME type of CSV artifacts.
pub const CSV_MIME: &str = "text/csv";
/// MIME type of `.xlsx` artifacts.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
/// MIME type of extracted-text artifacts.
pub const TEXT_MIME: &str = "text/plain";

/// Target formats for conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExportFormat {
    /// Comma-separated values.
    Csv,
    /// Single-sheet `.xlsx` workbook.
    Excel,
}

impl ExportFormat {
    /// Extension of produced files, with the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => ".csv",
            Self::Excel => ".xlsx",
        }
    }

    /// MIME type of produced files.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => CSV_MIME,
            Self::Excel => XLSX_MIME,
        }
    }

    /// Human-readable name (`CSV` / `Excel`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Excel => "Excel",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExportFormat {
    type Err = SweepError;

    /// Accepts `csv`, `excel` or `xlsx` in any case. Anything else is an error, never a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "excel" | "xlsx" => Ok(Self::Excel),
            _ => Err(SweepError::UnsupportedFormat {
                format: s.to_owned(),
            }),
        }
    }
}

/// Bytes plus download metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Download file name.
    pub file_name: String,
    /// MIME type.
    pub mime_type: &'static str,
    /// File content.
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Size of the content in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// `source_name` with its extension replaced by the target format's.
pub fn export_file_name(source_name: &str, format: ExportFormat) -> String {
    format!("{}{}", file_stem(source_name), format.extension())
}

/// Serialize `table` to `format`, naming the artifact after `source_name`.
///
/// Writer failures surface as [`SweepError::ExportError`]; no partial artifact is returned.
pub fn export(table: &Table, source_name: &str, format: ExportFormat) -> SweepResult<ExportArtifact> {
    let result = match format {
        ExportFormat::Csv => csv::write_csv(table),
        ExportFormat::Excel => excel::write_xlsx(table),
    };
    let bytes = result.map_err(|source| SweepError::ExportError { format, source })?;

    Ok(ExportArtifact {
        file_name: export_file_name(source_name, format),
        mime_type: format.mime_type(),
        bytes,
    })
}
