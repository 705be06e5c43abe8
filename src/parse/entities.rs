//! HTML entity decoding.
//!
//! Only a fixed set of entities is decoded, in a single pass: `&amp;amp;`
//! becomes `&amp;`, not `&`.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::utils::compile_regex_unsafe;

const ENTITY_PATTERN: &str = r"&(amp|lt|gt|quot|#39|#x27|#x2F|nbsp);";

static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ENTITY_PATTERN, "ENTITY_RE"));

/// Decodes `&amp; &lt; &gt; &quot; &#39; &#x27; &#x2F; &nbsp;`.
///
/// Every other entity (named or numeric) is left untouched. `&nbsp;` becomes
/// a plain space.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    ENTITY_RE.replace_all(text, |caps: &Captures| {
        match &caps[1] {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" => "\"",
            "#39" | "#x27" => "'",
            "#x2F" => "/",
            _ => " ", // nbsp
        }
        .to_string()
    })
}
