//! Configuration for dragnet runs
//!
//! Precedence is CLI flags > config file > built-in defaults. The config
//! file is discovered by searching upward from the current directory for
//! `.dragnet/config.toml`; every field is optional and merged over the
//! defaults.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::fs;

/// Default retry ceiling per run.
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Default per-tool execution timeout, in seconds.
pub const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 300;
/// Default directory for audit report artifacts.
pub const DEFAULT_REPORT_DIR: &str = "logs";
/// Default nmap port range.
pub const DEFAULT_PORT_RANGE: &str = "1-1000";
/// Default gobuster wordlist.
pub const DEFAULT_WORDLIST: &str = "common.txt";
/// Backstop on total executions per run; unreachable under the default
/// retry budget, it only exists to bound pathological analyzer/retry
/// interactions.
pub const DEFAULT_MAX_EXECUTIONS: usize = 32;

/// Effective configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub max_retries: u32,
    pub tool_timeout_secs: u64,
    pub report_dir: Utf8PathBuf,
    pub port_range: String,
    pub wordlist: String,
    pub max_executions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            tool_timeout_secs: DEFAULT_TOOL_TIMEOUT_SECS,
            report_dir: Utf8PathBuf::from(DEFAULT_REPORT_DIR),
            port_range: DEFAULT_PORT_RANGE.to_string(),
            wordlist: DEFAULT_WORDLIST.to_string(),
            max_executions: DEFAULT_MAX_EXECUTIONS,
        }
    }
}

/// On-disk config shape; all fields optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    max_retries: Option<u32>,
    tool_timeout_secs: Option<u64>,
    report_dir: Option<Utf8PathBuf>,
    port_range: Option<String>,
    wordlist: Option<String>,
    max_executions: Option<usize>,
}

impl Config {
    /// Load configuration, optionally from an explicit file path.
    ///
    /// Without an explicit path, searches upward from the current directory
    /// for `.dragnet/config.toml`; absence of a config file is not an
    /// error. An explicit path that does not exist is.
    pub fn load(explicit: Option<&Utf8Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {path}");
                }
                Some(path.to_path_buf())
            }
            None => Self::discover()?,
        };

        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content =
            fs::read_to_string(&path).with_context(|| format!("Failed to read config: {path}"))?;
        let file: ConfigFile =
            toml::from_str(&content).with_context(|| format!("Failed to parse config: {path}"))?;

        Ok(Self::default().merged(file))
    }

    /// Search upward from the current directory for `.dragnet/config.toml`.
    fn discover() -> Result<Option<Utf8PathBuf>> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let mut current = Utf8PathBuf::from_path_buf(cwd)
            .map_err(|p| anyhow::anyhow!("Current directory is not UTF-8: {}", p.display()))?;

        loop {
            let candidate = current.join(".dragnet").join("config.toml");
            if candidate.exists() {
                return Ok(Some(candidate));
            }
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    fn merged(mut self, file: ConfigFile) -> Self {
        if let Some(v) = file.max_retries {
            self.max_retries = v;
        }
        if let Some(v) = file.tool_timeout_secs {
            self.tool_timeout_secs = v;
        }
        if let Some(v) = file.report_dir {
            self.report_dir = v;
        }
        if let Some(v) = file.port_range {
            self.port_range = v;
        }
        if let Some(v) = file.wordlist {
            self.wordlist = v;
        }
        if let Some(v) = file.max_executions {
            self.max_executions = v;
        }
        self
    }
}
