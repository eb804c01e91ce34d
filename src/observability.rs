use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::SweepError;
use crate::export::ExportFormat;
use crate::source::FileFormat;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational event.
    Info,
    /// Rejected user input (unknown extension, unknown column).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// Which operation an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepStage {
    /// Parsing an upload into a table. `None` when the extension was not recognized.
    Ingest(Option<FileFormat>),
    /// Cleaning and projecting a parsed table.
    Transform,
    /// Serializing a table for download.
    Export(ExportFormat),
    /// Extracting plain text. `None` when the extension was not recognized.
    Extract(Option<FileFormat>),
}

/// Context about one operation on one file.
#[derive(Debug, Clone)]
pub struct SweepContext {
    /// Name of the uploaded file.
    pub file_name: String,
    /// Operation being reported.
    pub stage: SweepStage,
}

/// Minimal stats reported on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepStats {
    /// Rows in the resulting table, when the operation produces one.
    pub rows: Option<usize>,
    /// Bytes produced (artifact or extracted text) or consumed (ingestion).
    pub bytes: usize,
}

/// Observer interface for operation outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait SweepObserver: Send + Sync {
    /// Called when an operation succeeds.
    fn on_success(&self, _ctx: &SweepContext, _stats: SweepStats) {}

    /// Called when an operation fails.
    fn on_failure(&self, _ctx: &SweepContext, _severity: Severity, _error: &SweepError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &SweepContext, severity: Severity, error: &SweepError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Classify an error for observers.
pub fn severity_for_error(e: &SweepError) -> Severity {
    match e {
        SweepError::Io(_) => Severity::Critical,
        SweepError::UnsupportedFormat { .. } | SweepError::UnknownColumn { .. } => {
            Severity::Warning
        }
        other if error_chain_contains_io(other) => Severity::Critical,
        _ => Severity::Error,
    }
}

fn error_chain_contains_io(e: &(dyn std::error::Error + 'static)) -> bool {
    let mut cur: Option<&(dyn std::error::Error + 'static)> = Some(e);
    while let Some(err) = cur {
        if err.is::<std::io::Error>() {
            return true;
        }
        cur = err.source();
    }
    false
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn SweepObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn SweepObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl SweepObserver for CompositeObserver {
    fn on_success(&self, ctx: &SweepContext, stats: SweepStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &SweepContext, severity: Severity, error: &SweepError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &SweepContext, severity: Severity, error: &SweepError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl SweepObserver for StdErrObserver {
    fn on_success(&self, ctx: &SweepContext, stats: SweepStats) {
        eprintln!(
            "[sweep][ok] stage={:?} file={} rows={:?} bytes={}",
            ctx.stage, ctx.file_name, stats.rows, stats.bytes
        );
    }

    fn on_failure(&self, ctx: &SweepContext, severity: Severity, error: &SweepError) {
        eprintln!(
            "[sweep][{:?}] stage={:?} file={} err={}",
            severity, ctx.stage, ctx.file_name, error
        );
    }

    fn on_alert(&self, ctx: &SweepContext, severity: Severity, error: &SweepError) {
        eprintln!(
            "[ALERT][sweep][{:?}] stage={:?} file={} err={}",
            severity, ctx.stage, ctx.file_name, error
        );
    }
}

/// Forwards events to `tracing`: successes at `info`, failures at `warn`, alerts at `error`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl SweepObserver for TracingObserver {
    fn on_success(&self, ctx: &SweepContext, stats: SweepStats) {
        tracing::info!(
            stage = ?ctx.stage,
            file = %ctx.file_name,
            rows = ?stats.rows,
            bytes = stats.bytes,
            "sweep step succeeded"
        );
    }

    fn on_failure(&self, ctx: &SweepContext, severity: Severity, error: &SweepError) {
        tracing::warn!(
            stage = ?ctx.stage,
            file = %ctx.file_name,
            ?severity,
            %error,
            "sweep step failed"
        );
    }

    fn on_alert(&self, ctx: &SweepContext, severity: Severity, error: &SweepError) {
        tracing::error!(
            stage = ?ctx.stage,
            file = %ctx.file_name,
            ?severity,
            %error,
            "sweep alert"
        );
    }
}

/// Appends events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl SweepObserver for FileObserver {
    fn on_success(&self, ctx: &SweepContext, stats: SweepStats) {
        self.append_line(&format!(
            "{} ok stage={:?} file={} rows={:?} bytes={}",
            unix_ts(),
            ctx.stage,
            ctx.file_name,
            stats.rows,
            stats.bytes
        ));
    }

    fn on_failure(&self, ctx: &SweepContext, severity: Severity, error: &SweepError) {
        self.append_line(&format!(
            "{} fail severity={:?} stage={:?} file={} err={}",
            unix_ts(),
            severity,
            ctx.stage,
            ctx.file_name,
            error
        ));
    }

    fn on_alert(&self, ctx: &SweepContext, severity: Severity, error: &SweepError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} stage={:?} file={} err={}",
            unix_ts(),
            severity,
            ctx.stage,
            ctx.file_name,
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
