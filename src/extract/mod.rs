//! Plain-text extraction from uploaded files.
//!
//! - **TXT**: the bytes decoded as UTF-8, verbatim
//! - **CSV / Excel**: parsed into a [`crate::types::Table`] and rendered as aligned text
//! - **PDF**: page texts in page order, one `\n` between pages
//!
//! The result is a single in-memory string; [`text_artifact`] wraps it for download.

pub mod pdf;
pub mod render;

use std::str;

use crate::error::{SweepError, SweepResult};
use crate::export::{ExportArtifact, TEXT_MIME};
use crate::ingestion;
use crate::source::{FileFormat, SourceFile};

pub use render::render_table;

/// Download name for extracted text.
pub const EXTRACTED_TEXT_FILE_NAME: &str = "extracted_text.txt";

/// Extract plain text from `file`, choosing the method by extension.
///
/// ```
/// use data_sweeper::extract::extract_text;
/// use data_sweeper::source::SourceFile;
///
/// # fn main() -> Result<(), data_sweeper::SweepError> {
/// let file = SourceFile::new("scores.csv", "name,score\nAda,1.5\nAl,2\n");
/// assert_eq!(extract_text(&file)?, "name score\n Ada   1.5\n  Al   2.0");
/// # Ok(())
/// # }
/// ```
pub fn extract_text(file: &SourceFile) -> SweepResult<String> {
    let format = file.format()?;
    extract_as(file, format)
}

pub(crate) fn extract_as(file: &SourceFile, format: FileFormat) -> SweepResult<String> {
    match format {
        FileFormat::Text => str::from_utf8(&file.bytes)
            .map(str::to_owned)
            .map_err(|source| SweepError::EncodingError {
                file_name: file.name.clone(),
                source,
            }),
        FileFormat::Csv | FileFormat::Excel => {
            let table = ingestion::parse_as(file, format)?;
            Ok(render_table(&table))
        }
        FileFormat::Pdf => {
            pdf::extract_pdf_text(&file.bytes).map_err(|source| SweepError::ExtractionError {
                file_name: file.name.clone(),
                source,
            })
        }
    }
}

/// Wrap extracted text as the `extracted_text.txt` download.
pub fn text_artifact(text: impl Into<String>) -> ExportArtifact {
    ExportArtifact {
        file_name: EXTRACTED_TEXT_FILE_NAME.to_string(),
        mime_type: TEXT_MIME,
        bytes: text.into().into_bytes(),
    }
}
