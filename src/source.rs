//! Uploaded files and extension-based format detection.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{SweepError, SweepResult};

/// File formats recognized across the tabular and text pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileFormat {
    /// Comma-separated values (`.csv`).
    Csv,
    /// Office Open XML workbook (`.xlsx`).
    Excel,
    /// Plain UTF-8 text (`.txt`).
    Text,
    /// PDF document (`.pdf`).
    Pdf,
}

impl FileFormat {
    /// Parse a format from a file extension (case-insensitive, without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Excel),
            "txt" => Some(Self::Text),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Whether the tabular pipeline (ingest, clean, export) accepts this format.
    pub fn is_tabular(self) -> bool {
        matches!(self, Self::Csv | Self::Excel)
    }
}

/// An uploaded file: a name and its bytes.
///
/// Created on upload and read as many times as needed, since the bytes are buffered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name as uploaded, including the extension.
    pub name: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl SourceFile {
    /// Create a source file from a name and in-memory bytes.
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, using its file name as the upload name.
    pub fn from_path(path: impl AsRef<Path>) -> SweepResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Size in kilobytes (1 KB = 1024 bytes).
    pub fn size_kb(&self) -> f64 {
        self.bytes.len() as f64 / 1024.0
    }

    /// Lowercased text after the last dot of the name, or `None` if there is no dot.
    pub fn extension(&self) -> Option<String> {
        file_extension(&self.name)
    }

    /// Detect the format from the extension.
    ///
    /// Fails with [`SweepError::UnsupportedFormat`] naming the extension; content is never sniffed.
    pub fn format(&self) -> SweepResult<FileFormat> {
        let ext = self.extension().unwrap_or_default();
        FileFormat::from_extension(&ext).ok_or(SweepError::UnsupportedFormat {
            format: format!(".{ext}"),
        })
    }
}

/// Lowercased text after the last dot of `name`.
pub fn file_extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())
}

/// `name` without its extension (the text before the last dot), or the whole name if it has none.
pub fn file_stem(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(stem, _)| stem)
}
