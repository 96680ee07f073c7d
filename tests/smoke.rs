//! Smoke tests for the public entrypoint and CLI surface.

use std::fs;

use camino::Utf8PathBuf;
use clap::Parser;
use dragnet::cli::{Cli, Commands};
use dragnet::{Config, run_scan};

#[test]
fn keywordless_instruction_completes_with_empty_report() {
    // No recognized intent means no task, no process, and an empty (but
    // present) audit trail. Safe to run end-to-end: nothing spawns.
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        report_dir: Utf8PathBuf::from_path_buf(dir.path().join("logs")).unwrap(),
        ..Config::default()
    };

    let outcome = run_scan(
        "summarize the weather",
        vec!["example.com".to_string()],
        &config,
    )
    .unwrap();

    assert!(outcome.state.executed.is_empty());
    assert!(outcome.state.scope_violations.is_empty());
    assert_eq!(outcome.state.retries, 0);

    let json = fs::read_to_string(&outcome.reports.json).unwrap();
    assert!(json.contains("\"executed_tasks\":[]"));
    assert!(json.contains("\"scope_violations\":[]"));
    assert!(outcome.reports.markdown.as_std_path().exists());
}

#[test]
fn scan_args_parse_with_comma_separated_scope() {
    let cli = Cli::parse_from([
        "dragnet",
        "scan",
        "Scan example.com for open ports",
        "--scope",
        "example.com,example.org",
        "--max-retries",
        "5",
    ]);

    match cli.command {
        Commands::Scan {
            instruction,
            scope,
            max_retries,
            ..
        } => {
            assert_eq!(instruction, "Scan example.com for open ports");
            assert_eq!(
                scope,
                vec!["example.com".to_string(), "example.org".to_string()]
            );
            assert_eq!(max_retries, Some(5));
        }
        Commands::Doctor => panic!("expected scan command"),
    }
}

#[test]
fn scan_requires_a_scope() {
    let result = Cli::try_parse_from(["dragnet", "scan", "Scan example.com for open ports"]);
    assert!(result.is_err());
}

#[test]
fn doctor_parses() {
    let cli = Cli::parse_from(["dragnet", "doctor"]);
    assert!(matches!(cli.command, Commands::Doctor));
}
