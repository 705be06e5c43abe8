//! Human-readable terminal report.

use colored::*;

use super::preview::{build_previews, render_preview_box};
use crate::models::{CheckResult, IssueSummary, MetadataMap};
use crate::utils::truncate_chars;
use crate::validate::{Issue, Severity};

/// Longest value shown in the tag table before it is cut.
const TABLE_VALUE_WIDTH: usize = 80;

/// Tag table groups, in display order.
const GROUPS: &[(&str, fn(&str) -> bool)] = &[
    ("Open Graph", |k| k.starts_with("og:")),
    ("Twitter Card", |k| k.starts_with("twitter:")),
    ("Standard", |k| !k.starts_with("og:") && !k.starts_with("twitter:")),
];

fn severity_icon(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "✖".red().bold(),
        Severity::Warning => "⚠".yellow().bold(),
        Severity::Info => "ℹ".blue().bold(),
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Renders the tag table grouped by namespace. Empty groups are omitted.
pub fn render_tag_table(tags: &MetadataMap) -> String {
    if tags.is_empty() {
        return format!("  {}", "No metadata found".dimmed());
    }

    let key_width = tags.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    let mut out = Vec::new();
    for (group, belongs) in GROUPS {
        let rows: Vec<String> = tags
            .iter()
            .filter(|(k, _)| belongs(k))
            .map(|(k, v)| {
                format!(
                    "  {:width$}  {}",
                    k.cyan(),
                    truncate_chars(v, TABLE_VALUE_WIDTH),
                    width = key_width
                )
            })
            .collect();
        if rows.is_empty() {
            continue;
        }
        out.push(group.bold().to_string());
        out.extend(rows);
        out.push(String::new());
    }
    out.pop();
    out.join("\n")
}

fn render_issue(issue: &Issue) -> String {
    let mut lines = vec![format!(
        "  {} {} {}",
        severity_icon(issue.severity),
        issue.tag.bold(),
        issue.problem
    )];
    for (i, line) in issue.fix.lines().enumerate() {
        let prefix = if i == 0 { "fix:" } else { "    " };
        lines.push(format!("      {} {}", prefix.dimmed(), line.green()));
    }
    lines.join("\n")
}

/// Renders the `N errors, N warnings, N info` line.
pub fn render_counts(summary: &IssueSummary) -> String {
    format!(
        "{}, {}, {}",
        plural(summary.errors, "error").red(),
        plural(summary.warnings, "warning").yellow(),
        format!("{} info", summary.info).blue()
    )
}

/// Renders the issue list, or the all-good banner when there are no issues.
pub fn render_issues(result: &CheckResult) -> String {
    if result.issues.is_empty() {
        return format!(
            "{}",
            "✔ All good! Your page is ready to be shared.".green().bold()
        );
    }
    let mut out: Vec<String> = result.issues.iter().map(render_issue).collect();
    out.push(String::new());
    out.push(format!("  {}", render_counts(&result.summary())));
    out.join("\n")
}

/// Renders the complete terminal report: header, tag table, previews, issues.
pub fn render_terminal(result: &CheckResult) -> String {
    let previews: Vec<String> = build_previews(result)
        .iter()
        .map(render_preview_box)
        .collect();

    [
        format!("{} {}", "Social preview check:".bold(), result.final_url.underline()),
        String::new(),
        "Tags".bold().underline().to_string(),
        render_tag_table(&result.tags),
        String::new(),
        "Previews".bold().underline().to_string(),
        previews.join("\n\n"),
        String::new(),
        "Issues".bold().underline().to_string(),
        render_issues(result),
    ]
    .join("\n")
}
