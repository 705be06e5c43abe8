//! HTML metadata extraction.
//!
//! This module turns raw HTML text into a `MetadataMap`:
//! - `title` from the first `<title>`
//! - every `<meta>` `property`/`name` + `content` pair (Open Graph, Twitter Card, standard)
//! - `description` (secondary scan, attribute order independent)
//! - `canonical` and `favicon` from `<link>` elements
//!
//! Parsing is done with regular expressions over the raw text rather than a
//! DOM, so markup a strict parser would reject or repair is read as written.

mod entities;
mod html;
mod links;

use log::debug;

use crate::models::MetadataMap;

// Re-export public API
pub use entities::decode_entities;
pub use html::{extract_meta_description, extract_meta_tags, extract_title};
pub use links::{extract_canonical, extract_favicon};

/// Extracts all supported metadata from an HTML document.
///
/// Never fails: absent or unreadable tags are simply missing from the map.
pub fn extract_metadata(html: &str) -> MetadataMap {
    let mut tags = MetadataMap::new();

    if let Some(title) = extract_title(html) {
        tags.insert("title".to_string(), title);
    }

    let meta_count = extract_meta_tags(html, &mut tags);
    debug!("Extracted {} <meta> pairs", meta_count);

    let has_description = tags
        .get("description")
        .is_some_and(|d| !d.trim().is_empty());
    if !has_description {
        if let Some(description) = extract_meta_description(html) {
            debug!("Recovered description from secondary scan");
            tags.insert("description".to_string(), description);
        }
    }

    if let Some(canonical) = extract_canonical(html) {
        tags.insert("canonical".to_string(), canonical);
    }
    if let Some(favicon) = extract_favicon(html) {
        tags.insert("favicon".to_string(), favicon);
    }

    debug!("Extracted {} metadata keys", tags.len());
    tags
}
