use std::process::Stdio;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::error::RunnerError;
use crate::{CommandSpec, ProcessOutput, ProcessRunner};

/// Process runner backed by `std::process::Command`.
///
/// Spawns the tool with piped stdout/stderr and waits on a helper thread so
/// the timeout can be enforced from the calling thread. On expiry the child
/// is killed (SIGKILL on unix, `TerminateProcess` on windows) before the
/// timeout error is returned, so no scanner outlives its budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRunner;

impl NativeRunner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Kill a child process by PID after a timeout.
    fn terminate(pid: u32) {
        #[cfg(unix)]
        unsafe {
            libc::kill(pid as i32, libc::SIGKILL);
        }

        #[cfg(windows)]
        {
            use windows::Win32::Foundation::CloseHandle;
            use windows::Win32::System::Threading::{
                OpenProcess, PROCESS_TERMINATE, TerminateProcess,
            };

            unsafe {
                if let Ok(handle) = OpenProcess(PROCESS_TERMINATE, false, pid) {
                    let _ = TerminateProcess(handle, 1);
                    let _ = CloseHandle(handle);
                }
            }
        }

        #[cfg(not(any(unix, windows)))]
        let _ = pid;
    }
}

impl ProcessRunner for NativeRunner {
    fn run(&self, cmd: &CommandSpec, timeout: Duration) -> Result<ProcessOutput, RunnerError> {
        let mut command = cmd.to_command();
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let child = command.spawn().map_err(|e| RunnerError::SpawnFailed {
            reason: format!("'{}': {}", cmd.program.to_string_lossy(), e),
        })?;

        let child_id = child.id();
        let (tx, rx) = mpsc::channel();

        let waiter = thread::spawn(move || {
            let _ = tx.send(child.wait_with_output());
        });

        match rx.recv_timeout(timeout) {
            Ok(wait_result) => {
                let _ = waiter.join();

                let output = wait_result.map_err(|e| RunnerError::WaitFailed {
                    reason: e.to_string(),
                })?;

                Ok(ProcessOutput::new(
                    output.stdout,
                    output.stderr,
                    output.status.code(),
                ))
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                Self::terminate(child_id);
                // The waiter unblocks once the child is dead.
                let _ = waiter.join();

                Err(RunnerError::Timeout {
                    timeout_seconds: timeout.as_secs(),
                })
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(RunnerError::WaitFailed {
                reason: "process monitoring thread terminated unexpectedly".to_string(),
            }),
        }
    }
}
