use camino::Utf8PathBuf;
use thiserror::Error;

use crate::atomic::write_file_atomic;
use crate::emit::emit_jcs;
use crate::markdown::render_markdown;
use crate::model::AuditReport;

/// Structured report filename, fixed relative to the report directory.
pub const JSON_REPORT_FILE: &str = "audit_report.json";
/// Human-readable report filename.
pub const MARKDOWN_REPORT_FILE: &str = "audit_report.md";

/// Failure to persist an audit report.
///
/// This is the one fault class that surfaces as a run-level error: task
/// failures are data, but a run whose audit trail cannot be written must
/// fail visibly.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize audit report: {reason}")]
    EmitFailed { reason: String },

    #[error("Failed to write audit report {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}

/// Locations of the two report artifacts for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub json: Utf8PathBuf,
    pub markdown: Utf8PathBuf,
}

/// Writes both audit report artifacts into a fixed directory.
///
/// Writes are atomic and overwrite any prior run's reports.
pub struct ReportWriter {
    report_dir: Utf8PathBuf,
}

impl ReportWriter {
    #[must_use]
    pub fn new(report_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            report_dir: report_dir.into(),
        }
    }

    /// The fixed paths this writer emits to.
    #[must_use]
    pub fn paths(&self) -> ReportPaths {
        ReportPaths {
            json: self.report_dir.join(JSON_REPORT_FILE),
            markdown: self.report_dir.join(MARKDOWN_REPORT_FILE),
        }
    }

    /// Write the structured and human-readable reports.
    ///
    /// Idempotent: the same report always produces byte-identical JSON.
    pub fn write(&self, report: &AuditReport) -> Result<ReportPaths, ReportError> {
        let paths = self.paths();

        let json = emit_jcs(report).map_err(|e| ReportError::EmitFailed {
            reason: e.to_string(),
        })?;
        write_file_atomic(&paths.json, &json).map_err(|e| ReportError::WriteFailed {
            path: paths.json.to_string(),
            reason: e.to_string(),
        })?;

        let markdown = render_markdown(report);
        write_file_atomic(&paths.markdown, &markdown).map_err(|e| ReportError::WriteFailed {
            path: paths.markdown.to_string(),
            reason: e.to_string(),
        })?;

        Ok(paths)
    }
}
