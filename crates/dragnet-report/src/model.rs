use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Terminal status of one executed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecStatus {
    Success,
    Failed,
}

impl ExecStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

/// Classification of a failed execution.
///
/// Carried alongside the raw error text so the report distinguishes a
/// blocked out-of-scope command from a tool that ran and failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// Target outside the declared scope; no process was spawned
    ScopeViolation,
    /// The tool exceeded its time budget and was terminated
    Timeout,
    /// The tool ran and returned a failure exit code
    ToolFailure,
    /// The tool could not be started or waited on
    InvocationFault,
}

/// Immutable outcome record of running one task.
///
/// Appended to the run state in chronological order; the full sequence is
/// serialized into the audit report unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Tool name, e.g. "nmap"
    pub tool: String,
    /// Rendered command line (display only, never re-executed)
    pub command: String,
    pub status: ExecStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<FaultKind>,
    /// Captured at completion time
    pub timestamp: DateTime<Utc>,
}

impl ExecutionRecord {
    /// Whether this record is a scope violation.
    #[must_use]
    pub fn is_scope_violation(&self) -> bool {
        self.fault == Some(FaultKind::ScopeViolation)
    }

    /// Tag this record with a fault classification.
    #[must_use]
    pub fn with_fault(mut self, fault: FaultKind) -> Self {
        self.fault = Some(fault);
        self
    }
}

/// Structured audit report: a faithful serialization of final run state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Completion time of the run this report was built from
    pub generated_at: DateTime<Utc>,
    pub target_scope: Vec<String>,
    pub executed_tasks: Vec<ExecutionRecord>,
    pub scope_violations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(tool: &str, status: ExecStatus) -> ExecutionRecord {
        ExecutionRecord {
            tool: tool.to_string(),
            command: format!("{tool} example.com"),
            status,
            output: None,
            error: None,
            fault: None,
            timestamp: Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ExecStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&ExecStatus::Failed).unwrap(),
            "\"failed\""
        );
    }

    #[test]
    fn fault_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&FaultKind::ScopeViolation).unwrap(),
            "\"scope_violation\""
        );
    }

    #[test]
    fn none_fields_are_omitted() {
        let json = serde_json::to_string(&record("nmap", ExecStatus::Success)).unwrap();
        assert!(!json.contains("\"output\""));
        assert!(!json.contains("\"error\""));
        assert!(!json.contains("\"fault\""));
    }

    #[test]
    fn scope_violation_detection() {
        let mut rec = record("nmap", ExecStatus::Failed);
        assert!(!rec.is_scope_violation());
        rec.fault = Some(FaultKind::ScopeViolation);
        assert!(rec.is_scope_violation());
    }
}
