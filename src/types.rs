//! Run state model for the orchestration engine

use chrono::{DateTime, Utc};
use dragnet_report::{AuditReport, ExecutionRecord};
use dragnet_runner::CommandSpec;
use serde::{Deserialize, Serialize};

/// Tools the engine knows how to queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Port scan via nmap
    PortScan,
    /// Directory discovery via gobuster
    DirScan,
}

impl ToolKind {
    /// Name of the external binary, as recorded in audit reports.
    #[must_use]
    pub const fn program(&self) -> &'static str {
        match self {
            Self::PortScan => "nmap",
            Self::DirScan => "gobuster",
        }
    }
}

/// Lifecycle status of a planned task.
///
/// Set only by the executor after running the task; a task never returns to
/// `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Success,
    Failed,
}

/// One planned invocation of an external tool against one target.
#[derive(Debug, Clone)]
pub struct Task {
    pub tool: ToolKind,
    pub command: CommandSpec,
    pub target: String,
    pub status: TaskStatus,
}

impl Task {
    /// Create a task awaiting execution.
    #[must_use]
    pub fn pending(tool: ToolKind, command: CommandSpec, target: impl Into<String>) -> Self {
        Self {
            tool,
            command,
            target: target.into(),
            status: TaskStatus::Pending,
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.status, TaskStatus::Pending)
    }

    /// Rendered command line for audit records and log lines.
    #[must_use]
    pub fn command_line(&self) -> String {
        self.command.to_line()
    }
}

/// Mutable aggregate for one run, owned exclusively by the orchestrator.
///
/// Created fresh per invocation and discarded once the report builder has
/// consumed it; no run state persists across invocations.
#[derive(Debug)]
pub struct RunState {
    /// Authorized targets, fixed at run start
    pub scope: Vec<String>,
    /// Tasks awaiting execution, in insertion order
    pub task_list: Vec<Task>,
    /// Execution results, append-only, chronological
    pub executed: Vec<ExecutionRecord>,
    /// Violation messages, append-only; each mirrors a failed record's error
    pub scope_violations: Vec<String>,
    /// Retry attempts consumed so far (global per run, not per task)
    pub retries: u32,
    /// Retry ceiling, fixed at run start
    pub max_retries: u32,
    /// Stamped exactly once when the run reaches its terminal state
    pub completed_at: Option<DateTime<Utc>>,
}

impl RunState {
    #[must_use]
    pub fn new(scope: Vec<String>, max_retries: u32) -> Self {
        Self {
            scope,
            task_list: Vec::new(),
            executed: Vec::new(),
            scope_violations: Vec::new(),
            retries: 0,
            max_retries,
            completed_at: None,
        }
    }

    /// The task currently selected for execution: the first pending task,
    /// or `None` when the list is drained. At most one task is ever in
    /// flight; the engine is strictly sequential.
    #[must_use]
    pub fn current_task(&self) -> Option<&Task> {
        self.task_list.iter().find(|t| t.is_pending())
    }

    /// Render this state as the structured audit report.
    ///
    /// Pure: the report timestamp comes from `completed_at`, not the clock,
    /// so building twice from the same state yields identical reports. An
    /// unfinished state (never produced by the orchestrator) renders the
    /// epoch.
    #[must_use]
    pub fn to_report(&self) -> AuditReport {
        AuditReport {
            generated_at: self.completed_at.unwrap_or(DateTime::UNIX_EPOCH),
            target_scope: self.scope.clone(),
            executed_tasks: self.executed.clone(),
            scope_violations: self.scope_violations.clone(),
        }
    }
}
