use std::time::Duration;

use crate::CommandSpec;
use crate::error::RunnerError;

/// Captured output of one tool execution.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Standard output from the process
    pub stdout: Vec<u8>,
    /// Standard error from the process
    pub stderr: Vec<u8>,
    /// Exit code from the process (None if terminated by signal)
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    #[must_use]
    pub fn new(stdout: Vec<u8>, stderr: Vec<u8>, exit_code: Option<i32>) -> Self {
        Self {
            stdout,
            stderr,
            exit_code,
        }
    }

    /// Stdout as a UTF-8 string, lossy conversion.
    #[must_use]
    pub fn stdout_string(&self) -> String {
        String::from_utf8_lossy(&self.stdout).to_string()
    }

    /// Stderr as a UTF-8 string, lossy conversion.
    #[must_use]
    pub fn stderr_string(&self) -> String {
        String::from_utf8_lossy(&self.stderr).to_string()
    }

    /// Whether the process exited successfully (exit code 0).
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Trait for executing one scan-tool command.
///
/// Implementations MUST use argv-style APIs only, never shell string
/// evaluation. The interface is synchronous: the engine is strictly
/// sequential and the process wait is its only blocking operation.
/// Implementations own timeout enforcement and MUST terminate the child
/// when the budget expires (no orphaned scanners).
///
/// The trait is the engine's test seam: integration tests drive the whole
/// state machine through scripted implementations without spawning real
/// tools.
pub trait ProcessRunner {
    /// Execute `cmd`, waiting at most `timeout`.
    ///
    /// * `Ok(ProcessOutput)` - the process ran to completion (possibly with
    ///   a non-zero exit code).
    /// * `Err(RunnerError::Timeout)` - the budget expired; the child was
    ///   terminated.
    /// * `Err(_)` - the process could not be started or waited on.
    fn run(&self, cmd: &CommandSpec, timeout: Duration) -> Result<ProcessOutput, RunnerError>;
}
