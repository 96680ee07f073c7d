use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

/// Specification for one scan-tool invocation.
///
/// All process execution goes through this type to ensure argv-style
/// invocation: the program and each argument are discrete `OsString`
/// elements, never a shell string. A hostile target such as
/// `example.com;rm -rf /` therefore reaches the tool as a literal argument
/// instead of being interpreted by a shell.
///
/// # Example
///
/// ```rust
/// use dragnet_runner::CommandSpec;
///
/// let cmd = CommandSpec::new("nmap")
///     .arg("-p")
///     .arg("1-1000")
///     .arg("example.com");
///
/// assert_eq!(cmd.to_line(), "nmap -p 1-1000 example.com");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    /// The program to execute
    pub program: OsString,
    /// Arguments as discrete elements (NOT shell strings)
    pub args: Vec<OsString>,
    /// Optional working directory
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Create a new `CommandSpec` for the given program.
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append a single argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory for the command.
    #[must_use]
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Build a `std::process::Command` from this spec.
    ///
    /// The resulting `Command` uses argv-style argument passing; no shell
    /// evaluation occurs.
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }

        cmd
    }

    /// Render the invocation as a single display line.
    ///
    /// Used for audit records and log lines only. The rendered string is
    /// never handed back to a shell.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut line = self.program.to_string_lossy().into_owned();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}
