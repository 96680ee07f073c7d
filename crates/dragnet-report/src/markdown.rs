use std::fmt::Write;

use crate::model::AuditReport;

/// Character budget for tool output embedded in the Markdown report.
/// Port scans and directory brute-forces can produce megabytes of text;
/// the full output stays in the JSON report.
const OUTPUT_BUDGET: usize = 500;

/// Render the human-readable audit report.
///
/// One subsection per executed task, plus a violations section when any
/// command was blocked by the scope guard.
#[must_use]
pub fn render_markdown(report: &AuditReport) -> String {
    let mut md = String::new();

    md.push_str("# Cybersecurity Audit Report\n\n");
    let _ = writeln!(md, "**Generated:** {}", report.generated_at);
    let _ = writeln!(md, "**Target Scope:** {}\n", report.target_scope.join(", "));

    md.push_str("## Executed Tasks\n");
    for task in &report.executed_tasks {
        let _ = writeln!(md, "### {} Scan", task.tool);
        let _ = writeln!(md, "- **Command:** `{}`", task.command);
        let _ = writeln!(md, "- **Status:** {}", task.status.as_str());
        let _ = writeln!(md, "- **Timestamp:** {}", task.timestamp);
        if let Some(output) = task.output.as_deref().filter(|o| !o.is_empty()) {
            let _ = writeln!(md, "- **Output:**\n```\n{}\n```", truncate(output));
        }
        if let Some(error) = task.error.as_deref().filter(|e| !e.is_empty()) {
            let _ = writeln!(md, "- **Error:** {error}");
        }
        md.push('\n');
    }

    if !report.scope_violations.is_empty() {
        md.push_str("## Scope Violations\n");
        for violation in &report.scope_violations {
            let _ = writeln!(md, "- {violation}");
        }
    }

    md
}

/// Truncate to the output budget on a char boundary.
fn truncate(output: &str) -> String {
    if output.chars().count() <= OUTPUT_BUDGET {
        return output.to_string();
    }
    let mut truncated: String = output.chars().take(OUTPUT_BUDGET).collect();
    truncated.push_str("...");
    truncated
}
