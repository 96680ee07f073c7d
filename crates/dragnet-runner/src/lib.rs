//! Process execution for dragnet scan tools
//!
//! Executes external reconnaissance tools (nmap, gobuster, ...) as child
//! processes with a hard timeout and full stdout/stderr capture.
//!
//! # Security Model
//!
//! All execution goes through [`CommandSpec`] to guarantee argv-style
//! invocation. Arguments cross the process boundary as discrete elements;
//! no shell (`sh -c`, `cmd /C`) ever interprets them, so shell
//! metacharacters in targets or wordlist paths are inert.

pub mod command_spec;
pub mod error;
pub mod native;
pub mod process;

pub use command_spec::CommandSpec;
pub use error::RunnerError;
pub use native::NativeRunner;
pub use process::{ProcessOutput, ProcessRunner};
