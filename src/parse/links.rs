//! `<link>` extraction: canonical URL and favicon.

use regex::Regex;
use std::sync::LazyLock;

use super::entities::decode_entities;
use super::html::{attribute, parse_attributes};
use crate::utils::compile_regex_unsafe;

const LINK_PATTERN: &str = r#"(?is)<link\b((?:"[^"]*"|'[^']*'|[^>"'])*)>"#;

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(LINK_PATTERN, "LINK_RE"));

/// Returns the `href` of the first `<link>` whose `rel` satisfies `matches`.
///
/// `rel` is lower-cased with inner whitespace collapsed before matching, so
/// `rel="Shortcut  Icon"` reads as `shortcut icon`.
fn find_link_href(html: &str, matches: impl Fn(&str) -> bool) -> Option<String> {
    LINK_RE.captures_iter(html).find_map(|caps| {
        let attrs = parse_attributes(caps.get(1).map_or("", |m| m.as_str()));
        let rel = attribute(&attrs, "rel")?
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        if !matches(&rel) {
            return None;
        }
        let href = attribute(&attrs, "href")?;
        Some(decode_entities(href.trim()).into_owned())
    })
}

/// Extracts `<link rel="canonical" href="...">` (attributes in any order).
pub fn extract_canonical(html: &str) -> Option<String> {
    find_link_href(html, |rel| rel == "canonical")
}

/// Extracts the favicon from `<link rel="icon">` or `<link rel="shortcut icon">`.
pub fn extract_favicon(html: &str) -> Option<String> {
    find_link_href(html, |rel| rel == "icon" || rel == "shortcut icon")
}
