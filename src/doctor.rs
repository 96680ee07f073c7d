//! Environment preflight
//!
//! The engine shells out to external scanners; `dragnet doctor` reports
//! whether they resolve on PATH before an operator commits to a run. A
//! missing tool is advice, not an error; the run itself will record the
//! spawn fault if it comes to that.

use std::path::PathBuf;

use crate::types::ToolKind;

/// Resolution result for one known tool.
#[derive(Debug, Clone)]
pub struct ToolCheck {
    pub tool: ToolKind,
    /// Resolved binary location, `None` when not found on PATH
    pub path: Option<PathBuf>,
}

impl ToolCheck {
    #[must_use]
    pub const fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Probe PATH for every tool the planner can queue.
#[must_use]
pub fn check_tools() -> Vec<ToolCheck> {
    [ToolKind::PortScan, ToolKind::DirScan]
        .into_iter()
        .map(|tool| ToolCheck {
            tool,
            path: which::which(tool.program()).ok(),
        })
        .collect()
}
