//! dragnet - scoped reconnaissance orchestration with audit reports
//!
//! dragnet derives a sequence of external tool invocations (nmap port
//! scans, gobuster directory discovery) from a plain-language instruction,
//! executes them strictly inside a declared target scope, reacts to
//! results by extending the task list, retries failures against a global
//! budget, and persists an audit trail for every run.
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! dragnet scan "Scan example.com for open ports and discover directories" \
//!     --scope example.com
//! dragnet doctor
//! ```
//!
//! # Quick Start (Library)
//!
//! ```rust,no_run
//! use dragnet::{run_scan, Config};
//!
//! let config = Config::default();
//! let outcome = run_scan(
//!     "Scan example.com for open ports",
//!     vec!["example.com".to_string()],
//!     &config,
//! )?;
//!
//! println!("{} task(s) executed", outcome.state.executed.len());
//! println!("structured report at {}", outcome.reports.json);
//! # Ok::<(), dragnet::ReportError>(())
//! ```
//!
//! # Architecture
//!
//! One run is an explicit state machine
//! (`Plan → Execute → Analyze → { Execute | Done }`) over an exclusively
//! owned [`RunState`]. Every command passes the scope guard before any
//! process is spawned; every outcome, including blocked and failed
//! commands, is folded into the state as data. The terminal state is
//! rendered into two artifacts: canonical JCS JSON (byte-identical for
//! identical state) and sectioned Markdown, both written atomically.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod doctor;
pub mod engine;
pub mod intent;
pub mod logging;
pub mod planner;
pub mod types;

pub use config::Config;
pub use engine::{Decision, Orchestrator, ScanOutcome, run_scan};
pub use intent::{Intent, IntentClassifier, KeywordClassifier};
pub use types::{RunState, Task, TaskStatus, ToolKind};

// Re-exports from the support crates so library consumers need only one
// dependency.
pub use dragnet_report::{
    AuditReport, ExecStatus, ExecutionRecord, FaultKind, ReportError, ReportPaths, ReportWriter,
};
pub use dragnet_runner::{CommandSpec, NativeRunner, ProcessOutput, ProcessRunner, RunnerError};
pub use dragnet_scope::within_scope;
