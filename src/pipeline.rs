//! Per-file sweep: the entrypoints an interface layer calls.
//!
//! Each function here wraps the pure operations of [`crate::ingestion`], [`crate::processing`],
//! [`crate::export`] and [`crate::extract`], and reports the outcome to the
//! [`SweepObserver`] configured in [`SweepOptions`].
//!
//! - [`ingest`]: parse an upload into a [`Table`]
//! - [`SweepPlan::run`]: ingest → clean → select → export one file
//! - [`sweep_batch`]: run a plan over many files; one file failing never stops the rest
//! - [`extract`]: plain-text extraction plus its download artifact

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::SweepResult;
use crate::export::{self, ExportArtifact, ExportFormat};
use crate::extract;
use crate::ingestion;
use crate::observability::{SweepContext, SweepObserver, SweepStage, SweepStats, severity_for_error};
use crate::processing::{self, ChartData};
use crate::source::{FileFormat, SourceFile};
use crate::types::Table;

pub use crate::observability::Severity;

/// Default number of rows in previews.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Options controlling pipeline behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct SweepOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn SweepObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Severity,
    /// Rows kept in [`SweepOutcome::preview`].
    pub preview_rows: usize,
}

impl fmt::Debug for SweepOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SweepOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .field("preview_rows", &self.preview_rows)
            .finish()
    }
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: Severity::Critical,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl SweepOptions {
    fn report<T>(&self, ctx: SweepContext, result: &SweepResult<T>, stats: impl FnOnce(&T) -> SweepStats) {
        let Some(obs) = self.observer.as_ref() else {
            return;
        };
        match result {
            Ok(v) => obs.on_success(&ctx, stats(v)),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= self.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }
}

/// What to do with one uploaded tabular file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
    /// Drop fully-repeated rows.
    pub remove_duplicates: bool,
    /// Fill gaps in numeric columns with the column mean.
    pub fill_missing: bool,
    /// Columns to keep, in order. `None` keeps every column.
    pub columns: Option<Vec<String>>,
    /// Conversion target.
    pub target: ExportFormat,
}

impl SweepPlan {
    /// A plan that only converts to `target`.
    pub fn convert_to(target: ExportFormat) -> Self {
        Self {
            remove_duplicates: false,
            fill_missing: false,
            columns: None,
            target,
        }
    }

    /// Apply the cleaning and projection steps to an already parsed table.
    ///
    /// Order: duplicates, then mean-fill, then column selection.
    pub fn transform(&self, table: &Table) -> SweepResult<Table> {
        let mut out = if self.remove_duplicates {
            processing::remove_duplicates(table)
        } else {
            table.clone()
        };
        if self.fill_missing {
            out = processing::fill_missing_numeric(&out);
        }
        match &self.columns {
            Some(columns) => processing::select(&out, columns),
            None => Ok(out),
        }
    }

    /// Sweep one file: ingest, transform, then export to [`Self::target`].
    pub fn run(&self, file: &SourceFile, options: &SweepOptions) -> SweepResult<SweepOutcome> {
        let table = ingest(file, options)?;

        let result = self.transform(&table);
        options.report(
            SweepContext {
                file_name: file.name.clone(),
                stage: SweepStage::Transform,
            },
            &result,
            |t: &Table| SweepStats {
                rows: Some(t.row_count()),
                bytes: 0,
            },
        );
        let table = result?;

        let artifact = export_table(&table, &file.name, self.target, options)?;

        Ok(SweepOutcome {
            summary: FileSummary::new(file, &table),
            preview: table.head(options.preview_rows),
            chart: processing::bar_chart(&table),
            artifact,
        })
    }
}

/// Name, size and shape of a processed file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileSummary {
    /// Uploaded file name.
    pub file_name: String,
    /// Upload size in bytes.
    pub size_bytes: usize,
    /// Upload size in KB with two decimals, e.g. `"1.50 KB"`.
    pub size_label: String,
    /// Rows after cleaning and selection.
    pub rows: usize,
    /// Columns after selection.
    pub columns: Vec<String>,
}

impl FileSummary {
    fn new(file: &SourceFile, table: &Table) -> Self {
        Self {
            file_name: file.name.clone(),
            size_bytes: file.size(),
            size_label: format!("{:.2} KB", file.size_kb()),
            rows: table.row_count(),
            columns: table.column_names(),
        }
    }
}

/// Everything the interface layer renders for one swept file.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutcome {
    /// File summary.
    pub summary: FileSummary,
    /// First rows of the final table.
    pub preview: Table,
    /// Bar-chart data of the final table.
    pub chart: ChartData,
    /// Converted file for download.
    pub artifact: ExportArtifact,
}

/// Parse an upload into a [`Table`], reporting to the observer.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use data_sweeper::observability::StdErrObserver;
/// use data_sweeper::pipeline::{ingest, Severity, SweepOptions};
/// use data_sweeper::source::SourceFile;
///
/// let opts = SweepOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     alert_at_or_above: Severity::Error,
///     ..Default::default()
/// };
///
/// let file = SourceFile::new("notes.docx", "hello");
/// assert!(ingest(&file, &opts).is_err());
/// ```
pub fn ingest(file: &SourceFile, options: &SweepOptions) -> SweepResult<Table> {
    let result = ingestion::parse(file);
    options.report(
        SweepContext {
            file_name: file.name.clone(),
            stage: SweepStage::Ingest(file.format().ok()),
        },
        &result,
        |t: &Table| SweepStats {
            rows: Some(t.row_count()),
            bytes: file.size(),
        },
    );
    result
}

/// Export `table` under a name derived from `source_name`, reporting to the observer.
pub fn export_table(
    table: &Table,
    source_name: &str,
    format: ExportFormat,
    options: &SweepOptions,
) -> SweepResult<ExportArtifact> {
    let result = export::export(table, source_name, format);
    options.report(
        SweepContext {
            file_name: source_name.to_owned(),
            stage: SweepStage::Export(format),
        },
        &result,
        |a: &ExportArtifact| SweepStats {
            rows: Some(table.row_count()),
            bytes: a.len(),
        },
    );
    result
}

/// Extracted text plus its `extracted_text.txt` download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Text for display.
    pub text: String,
    /// Same text as a download artifact.
    pub artifact: ExportArtifact,
}

/// Extract plain text from `file`, reporting to the observer.
pub fn extract(file: &SourceFile, options: &SweepOptions) -> SweepResult<Extraction> {
    let format: Option<FileFormat> = file.format().ok();
    let result = extract::extract_text(file).map(|text| Extraction {
        artifact: extract::text_artifact(text.clone()),
        text,
    });
    options.report(
        SweepContext {
            file_name: file.name.clone(),
            stage: SweepStage::Extract(format),
        },
        &result,
        |e: &Extraction| SweepStats {
            rows: None,
            bytes: e.text.len(),
        },
    );
    result
}

/// Run `plan` over every file independently.
///
/// Results come back in input order, paired with the file name. A failure is recorded for its
/// file only; processing continues with the next one.
pub fn sweep_batch(
    files: &[SourceFile],
    plan: &SweepPlan,
    options: &SweepOptions,
) -> Vec<(String, SweepResult<SweepOutcome>)> {
    files
        .iter()
        .map(|file| {
            let outcome = plan.run(file, options);
            if let Err(e) = &outcome {
                tracing::warn!(file = %file.name, error = %e, "file skipped");
            }
            (file.name.clone(), outcome)
        })
        .collect()
}

/// Convenience helper for callers that want to reject unknown targets up front.
///
/// Parses `target` (`csv`, `excel`, `xlsx`) and builds a conversion-only plan.
pub fn plan_for_target(target: &str) -> SweepResult<SweepPlan> {
    let target: ExportFormat = target.parse()?;
    Ok(SweepPlan::convert_to(target))
}
