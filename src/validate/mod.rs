//! Metadata validation.
//!
//! Applies the fixed, ordered rule table in `rules` to an extracted
//! `MetadataMap`. The output order is the table order; issues are never
//! re-sorted, so the text of a report is stable between runs.

mod rules;
mod types;

use log::debug;

use crate::models::MetadataMap;

// Re-export public API
pub use types::{Issue, Severity};

use rules::{RuleContext, RULES};

/// Validates extracted metadata.
///
/// # Arguments
///
/// * `tags` - Metadata extracted from the page
/// * `page_url` - Final URL of the page; used to resolve relative image URLs
///   and to fill in suggested `og:url`/canonical values
///
/// # Returns
///
/// One issue per fired rule, in rule order.
pub fn validate(tags: &MetadataMap, page_url: &str) -> Vec<Issue> {
    let ctx = RuleContext::new(tags, page_url);
    let issues: Vec<Issue> = RULES
        .iter()
        .filter_map(|rule| {
            (rule.check)(&ctx).map(|found| Issue {
                tag: rule.tag.to_string(),
                problem: found.problem,
                fix: found.fix,
                severity: rule.severity,
            })
        })
        .collect();
    debug!(
        "{} of {} rules raised an issue for {}",
        issues.len(),
        RULES.len(),
        page_url
    );
    issues
}
