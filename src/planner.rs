//! Initial task planning
//!
//! Turns classified intents into concrete pending tasks. Planning only
//! ever targets the first scope entry; additional scope entries widen what
//! the guard authorizes but are never scanned proactively.

use dragnet_runner::CommandSpec;

use crate::config::Config;
use crate::intent::{Intent, IntentClassifier};
use crate::types::{Task, ToolKind};

/// Derive the initial task list from an instruction.
///
/// One pending task per recognized intent, in classification order. An
/// empty scope plans nothing: there is no target to aim at, and the guard
/// would reject whatever we invented.
#[must_use]
pub fn plan(
    instruction: &str,
    scope: &[String],
    config: &Config,
    classifier: &dyn IntentClassifier,
) -> Vec<Task> {
    let Some(target) = scope.first() else {
        return Vec::new();
    };

    classifier
        .classify(instruction)
        .into_iter()
        .map(|intent| match intent {
            Intent::PortScan => port_scan_task(target, config),
            Intent::DirectoryDiscovery => dir_scan_task(target, config),
        })
        .collect()
}

/// `nmap -p <range> <target>`
#[must_use]
pub fn port_scan_task(target: &str, config: &Config) -> Task {
    let command = CommandSpec::new(ToolKind::PortScan.program())
        .arg("-p")
        .arg(&config.port_range)
        .arg(target);
    Task::pending(ToolKind::PortScan, command, target)
}

/// `gobuster dir -u http://<target> -w <wordlist>`
#[must_use]
pub fn dir_scan_task(target: &str, config: &Config) -> Task {
    let command = CommandSpec::new(ToolKind::DirScan.program())
        .arg("dir")
        .arg("-u")
        .arg(format!("http://{target}"))
        .arg("-w")
        .arg(&config.wordlist);
    Task::pending(ToolKind::DirScan, command, target)
}
