//! Title and `<meta>` extraction.
//!
//! A best-effort text scan, not a DOM parse: malformed markup never fails,
//! it only leaves keys out of the map.

use regex::Regex;
use std::sync::LazyLock;

use super::entities::decode_entities;
use crate::models::MetadataMap;
use crate::utils::compile_regex_unsafe;

const TITLE_PATTERN: &str = r"(?is)<title\b[^>]*>(.*?)</title\s*>";
/// A `<meta ...>` element; quoted attribute values may contain `>`.
const META_PATTERN: &str = r#"(?is)<meta\b((?:"[^"]*"|'[^']*'|[^>"'])*)>"#;
/// One `name="value"` or `name='value'` attribute. Where the name may start
/// is checked in `parse_attributes`.
const ATTRIBUTE_PATTERN: &str = r#"(?is)([a-z_:][-a-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#;

// Secondary scan for the description, tolerant of unquoted `name=description`.
// Attribute names must follow whitespace or a quote, so `data-content` and
// `data-name` never match.
const DESCRIPTION_NAME_FIRST_PATTERN: &str = r#"(?is)<meta\b[^>]*?[\s"']name\s*=\s*["']?description["'\s/](?:[^>]*?[\s"'])?content\s*=\s*(?:"([^"]*)"|'([^']*)')"#;
const DESCRIPTION_CONTENT_FIRST_PATTERN: &str = r#"(?is)<meta\b[^>]*?[\s"']content\s*=\s*(?:"([^"]*)"|'([^']*)')(?:[^>]*?[\s"'])?name\s*=\s*["']?description["'\s/>]"#;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TITLE_PATTERN, "TITLE_RE"));
static META_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(META_PATTERN, "META_RE"));
static ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ATTRIBUTE_PATTERN, "ATTRIBUTE_RE"));
static DESCRIPTION_NAME_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(DESCRIPTION_NAME_FIRST_PATTERN, "DESCRIPTION_NAME_FIRST_RE")
});
static DESCRIPTION_CONTENT_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(DESCRIPTION_CONTENT_FIRST_PATTERN, "DESCRIPTION_CONTENT_FIRST_RE")
});

/// True when an attribute name may begin at byte `start` of `attrs`: at the
/// start, or right after whitespace, a quote or `/`. A value that runs into
/// the next name (`"og:title"content=...`) is tolerated; `data-content` is
/// not read as `content`.
fn starts_attribute(attrs: &str, start: usize) -> bool {
    attrs[..start]
        .chars()
        .next_back()
        .map_or(true, |c| c.is_whitespace() || matches!(c, '"' | '\'' | '/'))
}

/// Parses the quoted attributes of an element's attribute text.
///
/// Names are lower-cased; values are returned raw (not entity-decoded).
/// Unquoted values are skipped.
pub(crate) fn parse_attributes(attrs: &str) -> Vec<(String, &str)> {
    ATTRIBUTE_RE
        .captures_iter(attrs)
        .filter_map(|caps| {
            let name = caps.get(1)?;
            if !starts_attribute(attrs, name.start()) {
                return None;
            }
            let name = name.as_str().to_ascii_lowercase();
            let value = caps.get(2).or_else(|| caps.get(3))?.as_str();
            Some((name, value))
        })
        .collect()
}

/// Looks up the first attribute called `name` (already lower-case).
pub(crate) fn attribute<'a>(attrs: &[(String, &'a str)], name: &str) -> Option<&'a str> {
    attrs.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
}

/// Extracts the first `<title>` element's text, trimmed and entity-decoded.
pub fn extract_title(html: &str) -> Option<String> {
    let caps = TITLE_RE.captures(html)?;
    let title = decode_entities(caps.get(1)?.as_str());
    Some(title.trim().to_string())
}

/// Extracts every `<meta property|name=... content=...>` pair into `tags`.
///
/// `property` wins over `name` when both are present. Keys are trimmed and
/// lower-cased; elements without a key or without `content` are skipped.
/// A later element overwrites an earlier one with the same key.
///
/// # Returns
///
/// The number of pairs stored.
pub fn extract_meta_tags(html: &str, tags: &mut MetadataMap) -> usize {
    let mut stored = 0;
    for caps in META_RE.captures_iter(html) {
        let attrs = parse_attributes(caps.get(1).map_or("", |m| m.as_str()));

        let key = ["property", "name"]
            .iter()
            .filter_map(|n| attribute(&attrs, n))
            .map(|k| k.trim().to_lowercase())
            .find(|k| !k.is_empty());
        let Some(key) = key else {
            continue;
        };
        let Some(content) = attribute(&attrs, "content") else {
            log::trace!("Skipping <meta> {key} without content");
            continue;
        };

        tags.insert(key, decode_entities(content).into_owned());
        stored += 1;
    }
    stored
}

/// Extracts `<meta name="description" content="...">` with attributes in either order.
///
/// Used after `extract_meta_tags` to recover descriptions written with an
/// unquoted `name=description`, which the generic scan does not read.
pub fn extract_meta_description(html: &str) -> Option<String> {
    let caps = DESCRIPTION_NAME_FIRST_RE
        .captures(html)
        .or_else(|| DESCRIPTION_CONTENT_FIRST_RE.captures(html))?;
    let content = caps.get(1).or_else(|| caps.get(2))?.as_str();
    Some(decode_entities(content).into_owned())
}
