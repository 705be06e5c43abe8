//! JSON report.

use serde::Serialize;

use crate::models::{CheckResult, IssueSummary, MetadataMap};
use crate::validate::Issue;

/// Shape of the `--json` document.
#[derive(Serialize)]
struct JsonReport<'a> {
    url: &'a str,
    valid: bool,
    tags: &'a MetadataMap,
    issues: &'a [Issue],
    summary: IssueSummary,
}

/// Renders a check result as pretty-printed JSON:
/// `{ url, valid, tags, issues, summary: { errors, warnings, info } }`.
pub fn render_json(result: &CheckResult) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        url: &result.final_url,
        valid: result.is_valid(),
        tags: &result.tags,
        issues: &result.issues,
        summary: result.summary(),
    };
    serde_json::to_string_pretty(&report)
}

/// Renders a fetch failure as `{ "error": "..." }`.
pub fn render_json_error(message: &str) -> String {
    serde_json::to_string_pretty(&serde_json::json!({ "error": message }))
        .unwrap_or_else(|_| "{\"error\":\"\"}".into())
}
