use thiserror::Error;

use crate::export::ExportFormat;

/// Convenience result type for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;

/// Error type returned by ingestion, cleaning, export and extraction.
///
/// Every operation fails independently; nothing here is retried or treated as fatal by the crate.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Underlying I/O error (e.g. reading a source file from disk).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file extension (or requested target format) is not one this operation handles.
    #[error("unsupported file format: '{format}'")]
    UnsupportedFormat { format: String },

    /// A recognized format could not be parsed.
    #[error("failed to parse '{file_name}': {source}")]
    ParseError {
        file_name: String,
        source: ParseFailure,
    },

    /// A projection referenced a column the table does not have.
    #[error("unknown column '{column}'. columns={available:?}")]
    UnknownColumn {
        column: String,
        available: Vec<String>,
    },

    /// Serializing a table into the target format failed.
    #[error("failed to export {format} artifact: {source}")]
    ExportError {
        format: ExportFormat,
        source: ExportFailure,
    },

    /// A `.txt` upload was not valid UTF-8.
    #[error("'{file_name}' is not valid utf-8 text: {source}")]
    EncodingError {
        file_name: String,
        source: std::str::Utf8Error,
    },

    /// A PDF could not be opened or read.
    #[error("failed to extract text from '{file_name}': {source}")]
    ExtractionError {
        file_name: String,
        source: ExtractionFailure,
    },

    /// A table was constructed with duplicate column names or misaligned rows.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },
}

/// Underlying cause of a [`SweepError::ParseError`].
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// Malformed CSV (bad quoting, invalid UTF-8, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Corrupt or unreadable workbook.
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// Structurally invalid input the reader itself accepted.
    #[error("{message}")]
    Malformed { message: String },
}

impl ParseFailure {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

/// Underlying cause of a [`SweepError::ExportError`].
#[derive(Debug, Error)]
pub enum ExportFailure {
    /// CSV writer error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook writer error.
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Flushing the output buffer failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A cell holds a value the target format cannot represent.
    #[error("unsupported value in row {row} column '{column}': {message}")]
    UnsupportedCell {
        row: usize,
        column: String,
        message: String,
    },
}

/// Underlying cause of a [`SweepError::ExtractionError`].
#[derive(Debug, Error)]
pub enum ExtractionFailure {
    /// The PDF reader rejected the document.
    #[error("pdf error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// The document is encrypted.
    #[error("document is encrypted")]
    Encrypted,

    /// The decoder panicked on the document (malformed fonts or streams).
    #[error("pdf decoder panicked: {0}")]
    DecoderPanic(String),
}
