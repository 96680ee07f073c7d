//! Error types for the runner

use thiserror::Error;

/// Errors from executing an external scan tool.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The process could not be started (binary missing, permission denied, ...)
    #[error("Failed to spawn process: {reason}")]
    SpawnFailed { reason: String },

    /// The process started but waiting on it failed
    #[error("Failed to wait for process: {reason}")]
    WaitFailed { reason: String },

    /// The process exceeded its time budget and was terminated
    #[error("Command timed out after {timeout_seconds} seconds")]
    Timeout { timeout_seconds: u64 },
}
