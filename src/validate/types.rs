//! Issue and severity types.

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

/// How badly an issue affects link previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIterMacro)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The preview is broken or missing
    Error,
    /// The preview works but looks worse than it could
    Warning,
    /// Best-practice suggestion
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding produced by a validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Metadata key the finding is about (e.g. `og:image`)
    pub tag: String,
    /// What is wrong
    pub problem: String,
    /// Suggested markup or action
    pub fix: String,
    pub severity: Severity,
}
