//! End-to-end runs through the orchestrator with a scripted process runner,
//! down to the audit artifacts on disk.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::time::Duration;

use camino::Utf8PathBuf;
use dragnet::{
    AuditReport, CommandSpec, Config, ExecStatus, Orchestrator, ProcessOutput, ProcessRunner,
    ReportWriter, RunnerError,
};

/// Plays back canned tool outcomes in order; anything past the script
/// succeeds with empty output.
struct ScriptedRunner {
    script: RefCell<VecDeque<(i32, &'static str, &'static str)>>,
}

impl ScriptedRunner {
    fn with(script: Vec<(i32, &'static str, &'static str)>) -> Self {
        Self {
            script: RefCell::new(script.into()),
        }
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, _cmd: &CommandSpec, _timeout: Duration) -> Result<ProcessOutput, RunnerError> {
        let (code, stdout, stderr) = self
            .script
            .borrow_mut()
            .pop_front()
            .unwrap_or((0, "", ""));
        Ok(ProcessOutput::new(
            stdout.as_bytes().to_vec(),
            stderr.as_bytes().to_vec(),
            Some(code),
        ))
    }
}

fn report_dir(dir: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join("logs")).unwrap()
}

fn scope() -> Vec<String> {
    vec!["example.com".to_string()]
}

#[test]
fn successful_run_lands_in_both_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();
    let runner = ScriptedRunner::with(vec![(0, "PORT   STATE\n80/tcp open http", "")]);

    let state = Orchestrator::new(&config, &runner).run(
        "Scan example.com for open ports and discover directories",
        scope(),
    );

    let writer = ReportWriter::new(report_dir(&dir));
    let paths = writer.write(&state.to_report()).unwrap();

    let json = fs::read_to_string(&paths.json).unwrap();
    let report: AuditReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report.target_scope, scope());
    assert_eq!(report.executed_tasks.len(), 1);
    assert_eq!(report.executed_tasks[0].tool, "nmap");
    assert_eq!(report.executed_tasks[0].status, ExecStatus::Success);
    assert!(report.scope_violations.is_empty());

    let markdown = fs::read_to_string(&paths.markdown).unwrap();
    assert!(markdown.starts_with("# Cybersecurity Audit Report"));
    assert!(markdown.contains("### nmap Scan"));
    assert!(markdown.contains("- **Command:** `nmap -p 1-1000 example.com`"));
    assert!(markdown.contains("80/tcp open http"));
    assert!(!markdown.contains("## Scope Violations"));
}

#[test]
fn report_emission_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();
    let runner = ScriptedRunner::with(vec![(0, "443/tcp open https", "")]);

    let state =
        Orchestrator::new(&config, &runner).run("Scan example.com for open ports", scope());
    let report = state.to_report();

    let writer = ReportWriter::new(report_dir(&dir));
    let paths = writer.write(&report).unwrap();
    let first = fs::read(&paths.json).unwrap();
    writer.write(&report).unwrap();
    let second = fs::read(&paths.json).unwrap();

    assert_eq!(first, second);
}

#[test]
fn failed_executions_reach_the_report_with_errors() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();
    let runner = ScriptedRunner::with(vec![
        (1, "", "Failed to resolve example.com"),
        (1, "", "connection refused"),
    ]);

    let state = Orchestrator::new(&config, &runner).run(
        "Scan example.com for open ports and discover directories",
        scope(),
    );

    assert_eq!(state.executed.len(), 2);
    assert_eq!(state.retries, state.max_retries);

    let writer = ReportWriter::new(report_dir(&dir));
    let paths = writer.write(&state.to_report()).unwrap();

    let report: AuditReport =
        serde_json::from_str(&fs::read_to_string(&paths.json).unwrap()).unwrap();
    assert!(
        report
            .executed_tasks
            .iter()
            .all(|t| t.status == ExecStatus::Failed)
    );
    assert_eq!(
        report.executed_tasks[0].error.as_deref(),
        Some("Failed to resolve example.com")
    );

    let markdown = fs::read_to_string(&paths.markdown).unwrap();
    assert!(markdown.contains("- **Error:** Failed to resolve example.com"));
}

#[test]
fn analyzer_extends_the_task_list_after_a_web_port_hit() {
    // The port scan succeeds and reports 443; the analyzer queues one
    // directory-discovery task on top of the planned one.
    let config = Config::default();
    let runner = ScriptedRunner::with(vec![(0, "443/tcp open https", "")]);

    let state =
        Orchestrator::new(&config, &runner).run("Scan example.com for open ports", scope());

    assert_eq!(state.executed.len(), 1);
    assert_eq!(state.task_list.len(), 1);
    assert_eq!(state.task_list[0].tool, dragnet::ToolKind::DirScan);
    assert_eq!(
        state.task_list[0].command_line(),
        "gobuster dir -u http://example.com -w common.txt"
    );
}
