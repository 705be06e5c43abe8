//! Result types shared by the validator and the reporters.

use std::collections::BTreeMap;

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::validate::{Issue, Severity};

/// Extracted metadata: lower-cased key (`og:title`, `title`, `canonical`, ...)
/// to entity-decoded value. Iterates in key order.
pub type MetadataMap = BTreeMap<String, String>;

/// Issue counts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IssueSummary {
    /// Number of error-severity issues
    pub errors: usize,
    /// Number of warning-severity issues
    pub warnings: usize,
    /// Number of info-severity issues
    pub info: usize,
}

impl IssueSummary {
    /// Total number of issues of any severity.
    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.info
    }
}

/// The complete output of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// URL the page was served from, after redirects
    pub final_url: String,
    /// Metadata extracted from the page
    pub tags: MetadataMap,
    /// Findings, in rule evaluation order
    pub issues: Vec<Issue>,
}

impl CheckResult {
    /// Number of issues with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == severity)
            .count()
    }

    /// Issue counts for every severity.
    pub fn summary(&self) -> IssueSummary {
        let mut summary = IssueSummary::default();
        for severity in Severity::iter() {
            let n = self.count(severity);
            match severity {
                Severity::Error => summary.errors = n,
                Severity::Warning => summary.warnings = n,
                Severity::Info => summary.info = n,
            }
        }
        summary
    }

    /// True when no issue has error severity.
    pub fn is_valid(&self) -> bool {
        self.count(Severity::Error) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> Issue {
        Issue {
            tag: "og:title".to_string(),
            problem: "problem".to_string(),
            fix: "fix".to_string(),
            severity,
        }
    }

    #[test]
    fn test_summary_counts_each_severity() {
        let result = CheckResult {
            final_url: "https://example.com/".to_string(),
            tags: MetadataMap::new(),
            issues: vec![
                issue(Severity::Error),
                issue(Severity::Warning),
                issue(Severity::Warning),
                issue(Severity::Info),
            ],
        };
        let summary = result.summary();
        assert_eq!(
            summary,
            IssueSummary {
                errors: 1,
                warnings: 2,
                info: 1
            }
        );
        assert_eq!(summary.total(), 4);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_warnings_and_info_are_still_valid() {
        let result = CheckResult {
            final_url: "https://example.com/".to_string(),
            tags: MetadataMap::new(),
            issues: vec![issue(Severity::Warning), issue(Severity::Info)],
        };
        assert!(result.is_valid());
    }
}
