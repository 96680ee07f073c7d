//! Result analysis and follow-up planning
//!
//! The single analysis rule: a successful port scan that shows a web port
//! queues directory discovery against the primary target. The port check is
//! a textual substring match on the tool output ("80" or "443"), not a
//! parsed port list. No deduplication is performed; if the rule fires
//! twice, two directory tasks are queued.

use dragnet_report::ExecStatus;

use crate::config::Config;
use crate::planner::dir_scan_task;
use crate::types::{RunState, ToolKind};

const WEB_PORT_INDICATORS: [&str; 2] = ["80", "443"];

/// Inspect the most recent execution result and extend the task list.
///
/// Only the newest record is considered; older results never re-trigger
/// planning.
pub fn analyze(state: &mut RunState, config: &Config) {
    let Some(last) = state.executed.last() else {
        return;
    };

    if last.tool != ToolKind::PortScan.program() || last.status != ExecStatus::Success {
        return;
    }

    let found_web_port = last
        .output
        .as_deref()
        .is_some_and(|output| WEB_PORT_INDICATORS.iter().any(|p| output.contains(p)));
    if !found_web_port {
        return;
    }

    if let Some(target) = state.scope.first() {
        tracing::info!(scan_target = %target, "Port scan found a web port, queueing directory discovery");
        state.task_list.push(dir_scan_task(target, config));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use dragnet_report::{ExecStatus, ExecutionRecord};

    fn record(tool: &str, status: ExecStatus, output: Option<&str>) -> ExecutionRecord {
        ExecutionRecord {
            tool: tool.to_string(),
            command: format!("{tool} example.com"),
            status,
            output: output.map(str::to_string),
            error: None,
            fault: None,
            timestamp: Utc::now(),
        }
    }

    fn state_with(records: Vec<ExecutionRecord>) -> RunState {
        let mut state = RunState::new(vec!["example.com".to_string()], 3);
        state.executed = records;
        state
    }

    #[test]
    fn web_port_queues_directory_discovery() {
        let mut state = state_with(vec![record(
            "nmap",
            ExecStatus::Success,
            Some("443/tcp open https"),
        )]);
        analyze(&mut state, &Config::default());

        assert_eq!(state.task_list.len(), 1);
        assert_eq!(state.task_list[0].tool, ToolKind::DirScan);
        assert_eq!(state.task_list[0].target, "example.com");
    }

    #[test]
    fn failed_scan_queues_nothing() {
        let mut state = state_with(vec![record(
            "nmap",
            ExecStatus::Failed,
            Some("80/tcp open http"),
        )]);
        analyze(&mut state, &Config::default());
        assert!(state.task_list.is_empty());
    }

    #[test]
    fn non_port_scan_results_are_ignored() {
        let mut state = state_with(vec![record(
            "gobuster",
            ExecStatus::Success,
            Some("/admin (Status: 80)"),
        )]);
        analyze(&mut state, &Config::default());
        assert!(state.task_list.is_empty());
    }

    #[test]
    fn no_web_port_queues_nothing() {
        let mut state = state_with(vec![record(
            "nmap",
            ExecStatus::Success,
            Some("22/tcp open ssh"),
        )]);
        analyze(&mut state, &Config::default());
        assert!(state.task_list.is_empty());
    }

    #[test]
    fn missing_output_queues_nothing() {
        let mut state = state_with(vec![record("nmap", ExecStatus::Success, None)]);
        analyze(&mut state, &Config::default());
        assert!(state.task_list.is_empty());
    }

    #[test]
    fn empty_history_is_a_no_op() {
        let mut state = state_with(Vec::new());
        analyze(&mut state, &Config::default());
        assert!(state.task_list.is_empty());
    }

    #[test]
    fn only_the_newest_record_is_considered() {
        let mut state = state_with(vec![
            record("nmap", ExecStatus::Success, Some("80/tcp open http")),
            record("gobuster", ExecStatus::Success, Some("/admin")),
        ]);
        analyze(&mut state, &Config::default());
        assert!(state.task_list.is_empty());
    }

    #[test]
    fn duplicate_tasks_are_not_deduplicated() {
        let mut state = state_with(vec![record(
            "nmap",
            ExecStatus::Success,
            Some("80/tcp open http"),
        )]);
        let config = Config::default();
        analyze(&mut state, &config);
        analyze(&mut state, &config);
        assert_eq!(state.task_list.len(), 2);
    }

    #[test]
    fn indicator_match_is_substring_not_port_list() {
        // "8080" contains "80"; the check is deliberately textual.
        let mut state = state_with(vec![record(
            "nmap",
            ExecStatus::Success,
            Some("8080/tcp open http-proxy"),
        )]);
        analyze(&mut state, &Config::default());
        assert_eq!(state.task_list.len(), 1);
    }
}
