//! Orchestration state machine
//!
//! Drives one run through an explicit finite-state machine:
//!
//! ```text
//! Plan → Execute → Analyze → { Execute (retry) | Done }
//! ```
//!
//! `Plan` runs once and seeds the task list. `Execute` consumes the first
//! pending task through the scope-gated executor. `Analyze` may extend the
//! task list from the newest result. The retry branch re-enters `Execute`
//! while the last result is a failure and the global retry budget remains;
//! any other outcome terminates the run. All task-level failures are
//! captured as data on the run state; nothing escapes the engine as an
//! error except a report that cannot be persisted.

use std::time::Duration;

use chrono::Utc;
use dragnet_report::{
    ExecStatus, ExecutionRecord, FaultKind, ReportError, ReportPaths, ReportWriter,
};
use dragnet_runner::{NativeRunner, ProcessRunner, RunnerError};
use dragnet_scope::within_scope;

use crate::analyzer::analyze;
use crate::config::Config;
use crate::intent::{IntentClassifier, KeywordClassifier};
use crate::planner::plan;
use crate::types::{RunState, Task, TaskStatus};

/// States of the run state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunPhase {
    Plan,
    Execute,
    Analyze,
    Done,
}

/// Outcome of the retry branch after each execute/analyze cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Re-enter `Execute` with the next pending task (or a no-op pass)
    Retry,
    /// Terminate the run
    Done,
}

/// Sequences planner, executor, analyzer and retry policy over a run's
/// exclusively-owned [`RunState`].
pub struct Orchestrator<'a> {
    config: &'a Config,
    runner: &'a dyn ProcessRunner,
    classifier: &'a dyn IntentClassifier,
}

impl<'a> Orchestrator<'a> {
    #[must_use]
    pub fn new(config: &'a Config, runner: &'a dyn ProcessRunner) -> Self {
        Self {
            config,
            runner,
            classifier: &KeywordClassifier,
        }
    }

    /// Replace the default keyword classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: &'a dyn IntentClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Drive a run to completion and return the final state.
    ///
    /// Never fails: every task-level fault is folded into the state. The
    /// run terminates because the retry budget is finite and, as a
    /// backstop, total executions are capped at `config.max_executions`.
    #[must_use]
    pub fn run(&self, instruction: &str, scope: Vec<String>) -> RunState {
        let mut state = RunState::new(scope, self.config.max_retries);
        let mut phase = RunPhase::Plan;

        loop {
            phase = match phase {
                RunPhase::Plan => {
                    state.task_list = plan(instruction, &state.scope, self.config, self.classifier);
                    tracing::info!(tasks = state.task_list.len(), "Planned initial task list");
                    RunPhase::Execute
                }
                RunPhase::Execute => {
                    self.execute_step(&mut state);
                    RunPhase::Analyze
                }
                RunPhase::Analyze => {
                    analyze(&mut state, self.config);
                    match self.decide(&mut state) {
                        Decision::Retry => RunPhase::Execute,
                        Decision::Done => RunPhase::Done,
                    }
                }
                RunPhase::Done => {
                    state.completed_at = Some(Utc::now());
                    tracing::info!(
                        executed = state.executed.len(),
                        violations = state.scope_violations.len(),
                        "Run complete"
                    );
                    break;
                }
            };
        }

        state
    }

    /// Execute the current task, if any.
    ///
    /// The executed task is consumed: its result is appended to the
    /// history, violations are mirrored into the violation list, and the
    /// task list is reduced to the remaining pending tasks. With no pending
    /// task this is a no-op pass.
    fn execute_step(&self, state: &mut RunState) {
        let Some(index) = state.task_list.iter().position(Task::is_pending) else {
            return;
        };

        let record = self.execute(&state.task_list[index], &state.scope);

        state.task_list[index].status = match record.status {
            ExecStatus::Success => TaskStatus::Success,
            ExecStatus::Failed => TaskStatus::Failed,
        };
        if record.is_scope_violation()
            && let Some(error) = &record.error
        {
            state.scope_violations.push(error.clone());
        }
        state.executed.push(record);
        state.task_list.retain(Task::is_pending);
    }

    /// Execute one task under scope enforcement.
    ///
    /// An out-of-scope target is rejected before any process is spawned.
    /// In-scope commands run with the configured timeout; every outcome
    /// (success, failure exit, timeout, spawn fault) becomes an immutable
    /// record, timestamped at completion.
    #[must_use]
    pub fn execute(&self, task: &Task, scope: &[String]) -> ExecutionRecord {
        let command_line = task.command_line();

        if !within_scope(&task.target, scope) {
            let violation = format!("Out-of-scope command attempted: {command_line}");
            tracing::warn!(scan_target = %task.target, "Scope guard blocked task");
            return self.record(task, ExecStatus::Failed, None, Some(violation))
                .with_fault(FaultKind::ScopeViolation);
        }

        tracing::info!(tool = task.tool.program(), command = %command_line, "Executing task");
        let timeout = Duration::from_secs(self.config.tool_timeout_secs);

        match self.runner.run(&task.command, timeout) {
            Ok(output) if output.success() => {
                self.record(task, ExecStatus::Success, Some(output.stdout_string()), None)
            }
            Ok(output) => self
                .record(
                    task,
                    ExecStatus::Failed,
                    Some(output.stdout_string()),
                    Some(output.stderr_string()),
                )
                .with_fault(FaultKind::ToolFailure),
            Err(err @ RunnerError::Timeout { .. }) => self
                .record(task, ExecStatus::Failed, None, Some(err.to_string()))
                .with_fault(FaultKind::Timeout),
            Err(err) => self
                .record(task, ExecStatus::Failed, None, Some(err.to_string()))
                .with_fault(FaultKind::InvocationFault),
        }
    }

    fn record(
        &self,
        task: &Task,
        status: ExecStatus,
        output: Option<String>,
        error: Option<String>,
    ) -> ExecutionRecord {
        ExecutionRecord {
            tool: task.tool.program().to_string(),
            command: task.command_line(),
            status,
            output,
            error,
            fault: None,
            timestamp: Utc::now(),
        }
    }

    /// Retry policy: resume execution while the last result is a failure
    /// and the global budget remains; otherwise terminate.
    ///
    /// The budget is shared across the whole run: three failures anywhere
    /// exhaust it, whichever tasks they came from. A successful last result
    /// terminates the run even if pending tasks remain.
    pub fn decide(&self, state: &mut RunState) -> Decision {
        if state.executed.len() >= self.config.max_executions {
            tracing::warn!(
                executions = state.executed.len(),
                "Execution ceiling reached, terminating run"
            );
            return Decision::Done;
        }

        let Some(last) = state.executed.last() else {
            return Decision::Done;
        };

        if last.status == ExecStatus::Failed && state.retries < state.max_retries {
            state.retries += 1;
            match state.current_task() {
                Some(task) => tracing::info!(
                    attempt = state.retries,
                    command = %task.command_line(),
                    "Retrying task"
                ),
                None => tracing::info!(attempt = state.retries, "Retrying with no pending task"),
            }
            return Decision::Retry;
        }

        Decision::Done
    }
}

/// Final state plus the persisted report locations for one run.
#[derive(Debug)]
pub struct ScanOutcome {
    pub state: RunState,
    pub reports: ReportPaths,
}

/// Run a complete scan: plan, execute under scope enforcement, analyze,
/// retry, then persist both audit reports.
///
/// Synchronous; blocks until the run terminates. The returned error is the
/// single run-level fault class: the audit reports could not be written.
pub fn run_scan(
    instruction: &str,
    scope: Vec<String>,
    config: &Config,
) -> Result<ScanOutcome, ReportError> {
    let runner = NativeRunner::new();
    let state = Orchestrator::new(config, &runner).run(instruction, scope);

    let writer = ReportWriter::new(config.report_dir.clone());
    let reports = writer.write(&state.to_report())?;

    Ok(ScanOutcome { state, reports })
}
