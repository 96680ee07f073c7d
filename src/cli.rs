//! Command-line interface for dragnet

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::engine::run_scan;
use crate::logging::init_tracing;
use crate::{doctor, types::RunState};

/// dragnet - scoped reconnaissance orchestration with audit reports
#[derive(Parser)]
#[command(name = "dragnet")]
#[command(about = "Derive, scope-check and run reconnaissance scans from a plain instruction")]
#[command(long_about = r#"
dragnet turns a plain-language instruction into a bounded sequence of
reconnaissance tool runs (nmap port scans, gobuster directory discovery),
executes them strictly inside the declared target scope, and writes an
audit trail (canonical JSON + Markdown) for every run.

EXAMPLES:
  # Scan a host's ports and enumerate web directories
  dragnet scan "Scan example.com for open ports and discover directories" \
      --scope example.com

  # Multiple authorized targets; only the first is scanned proactively
  dragnet scan "Scan example.com for open ports" --scope example.com,example.org

  # Check that the scan tools are installed
  dragnet doctor

Every command a run attempts is checked against the scope list first;
out-of-scope commands are blocked, recorded as violations, and never
spawned. Only run dragnet against systems you are authorized to test.
"#)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (overrides discovery of .dragnet/config.toml)
    #[arg(long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a scoped reconnaissance scan
    Scan {
        /// Free-text instruction, e.g. "Scan example.com for open ports"
        instruction: String,

        /// Authorized targets (comma-separated); commands outside this
        /// scope are blocked
        #[arg(long, value_delimiter = ',', required = true)]
        scope: Vec<String>,

        /// Retry budget for the whole run
        #[arg(long)]
        max_retries: Option<u32>,

        /// Per-tool timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Directory for the audit report artifacts
        #[arg(long)]
        report_dir: Option<Utf8PathBuf>,
    },

    /// Check that the external scan tools are installed
    Doctor,
}

/// Parse arguments, dispatch, and render results.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Scan {
            instruction,
            scope,
            max_retries,
            timeout,
            report_dir,
        } => {
            let mut config = config;
            if let Some(v) = max_retries {
                config.max_retries = v;
            }
            if let Some(v) = timeout {
                config.tool_timeout_secs = v;
            }
            if let Some(v) = report_dir {
                config.report_dir = v;
            }

            execute_scan(&instruction, scope, &config)
        }
        Commands::Doctor => execute_doctor(),
    }
}

fn execute_scan(instruction: &str, scope: Vec<String>, config: &Config) -> Result<()> {
    let outcome = run_scan(instruction, scope, config).context("Scan run failed")?;

    print_summary(&outcome.state);
    println!("Reports:");
    println!("  {}", outcome.reports.json);
    println!("  {}", outcome.reports.markdown);

    Ok(())
}

fn print_summary(state: &RunState) {
    println!(
        "Completed with {} task(s) executed, {} scope violation(s)",
        state.executed.len(),
        state.scope_violations.len()
    );

    for record in &state.executed {
        println!(
            "  [{}] {} -- {}",
            record.status.as_str(),
            record.tool,
            record.command
        );
        if let Some(error) = &record.error {
            println!("        error: {error}");
        }
    }

    for violation in &state.scope_violations {
        println!("  violation: {violation}");
    }
}

fn execute_doctor() -> Result<()> {
    let checks = doctor::check_tools();
    let mut all_found = true;

    for check in &checks {
        match &check.path {
            Some(path) => println!("  ok      {:10} {}", check.tool.program(), path.display()),
            None => {
                all_found = false;
                println!("  missing {:10} not found on PATH", check.tool.program());
            }
        }
    }

    if !all_found {
        println!("\nInstall the missing tools before running scans.");
    }

    Ok(())
}
