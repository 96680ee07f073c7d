//! Audit report model and emission for dragnet
//!
//! A completed run is rendered twice from the same final state: once as
//! canonical JSON (JCS, RFC 8785) for machine consumption and once as
//! sectioned Markdown for humans. Both files are written atomically
//! (temp file → fsync → rename) and overwritten on every run, so a reader
//! never observes a half-written report and identical final state yields
//! byte-identical JSON.

mod atomic;
mod emit;
mod markdown;
mod model;
mod writer;

pub use atomic::write_file_atomic;
pub use emit::emit_jcs;
pub use markdown::render_markdown;
pub use model::{AuditReport, ExecStatus, ExecutionRecord, FaultKind};
pub use writer::{ReportError, ReportPaths, ReportWriter};
