//! Rendering of lookup results.

use std::fmt::Write;

use bgh_query::{Decision, StoreSummary};
use colored::Colorize;
use serde::Serialize;

const DEFAULT_TERMINAL_WIDTH: usize = 80;
const SEPARATOR_WIDTH: usize = 80;
const INDENT: &str = "  ";

/// JSON shape of a lookup result.
#[derive(Serialize)]
struct SearchOutput<'a> {
    count: usize,
    decisions: &'a [Decision],
}

/// JSON shape of the summary.
#[derive(Serialize)]
struct SummaryOutput<'a> {
    database: String,
    #[serde(flatten)]
    summary: &'a StoreSummary,
}

/// Current terminal width, falling back to 80 columns.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map_or(DEFAULT_TERMINAL_WIDTH, |(w, _)| usize::from(w.0))
}

/// Render decisions as text blocks with a leading and trailing count.
///
/// Titles are wrapped to `width` columns.
pub fn render_decisions(decisions: &[Decision], width: usize) -> String {
    let mut out = String::new();

    if decisions.is_empty() {
        let _ = writeln!(out, "{} No results found.", "✗".red().bold());
        return out;
    }

    let _ = writeln!(
        out,
        "{} Found {} result(s):",
        "✓".green().bold(),
        decisions.len().to_string().green().bold()
    );
    let _ = writeln!(out);

    let wrap_width = width.saturating_sub(INDENT.len()).max(20);
    for decision in decisions {
        let _ = writeln!(
            out,
            "{}: {} | {}: {} | {}: {}",
            "Date".white().bold(),
            decision.date.cyan(),
            "Senate".white().bold(),
            decision.senate,
            "Case".white().bold(),
            decision.case_number
        );
        for line in textwrap::wrap(&decision.title, wrap_width) {
            let _ = writeln!(out, "{INDENT}{line}");
        }
        let _ = writeln!(out, "{INDENT}{} {}", "URL:".dimmed(), decision.url);
        let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH).dimmed());
    }

    let _ = writeln!(
        out,
        "=> Total: {} results",
        decisions.len().to_string().bold()
    );
    out
}

/// Render decisions as a JSON document.
pub fn decisions_json(decisions: &[Decision]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SearchOutput {
        count: decisions.len(),
        decisions,
    })
}

/// Render the summary as text.
pub fn render_summary(database: &str, summary: &StoreSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "BGH Decisions Database".cyan().bold());
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}: {}", "Database".white().bold(), database);
    let _ = writeln!(
        out,
        "  {}: {}",
        "Decisions".white().bold(),
        summary.decision_count.to_string().green()
    );
    match (&summary.earliest, &summary.latest) {
        (Some(earliest), Some(latest)) => {
            let _ = writeln!(
                out,
                "  {}: {} to {}",
                "Covered".white().bold(),
                earliest,
                latest
            );
        }
        _ => {
            let _ = writeln!(out, "  {}: {}", "Covered".white().bold(), "no data".dimmed());
        }
    }
    out
}

/// Render the summary as a JSON document.
pub fn summary_json(database: &str, summary: &StoreSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SummaryOutput {
        database: database.to_string(),
        summary,
    })
}
