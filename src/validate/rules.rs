//! The rule table.
//!
//! Rules run in table order, every rule on every check; one rule firing never
//! suppresses another. Each rule yields at most one finding.

use url::Url;

use crate::config::{
    MIN_IMAGE_DIMENSION, OG_DESCRIPTION_MAX_LENGTH, OG_TITLE_MAX_LENGTH,
};
use crate::models::MetadataMap;
use crate::utils::{char_len, non_blank};

use super::types::Severity;

const TITLE_PLACEHOLDER: &str = "Your Page Title";
const DESCRIPTION_PLACEHOLDER: &str = "A short summary of this page";
const IMAGE_ALT_PLACEHOLDER: &str = "Describe what the image shows";
const IMAGE_FILE_SUGGESTION: &str = "/og-image.png";
const FALLBACK_ORIGIN: &str = "https://example.com";

/// Everything a rule may look at.
pub(crate) struct RuleContext<'a> {
    tags: &'a MetadataMap,
    page_url: &'a str,
    parsed_url: Option<Url>,
}

impl<'a> RuleContext<'a> {
    pub(crate) fn new(tags: &'a MetadataMap, page_url: &'a str) -> Self {
        Self {
            tags,
            page_url,
            parsed_url: Url::parse(page_url).ok(),
        }
    }

    /// Value of `key`, treating empty and whitespace-only values as absent.
    fn get(&self, key: &str) -> Option<&'a str> {
        non_blank(self.tags.get(key))
    }

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// `scheme://host[:port]` of the page, for suggested asset URLs.
    fn origin(&self) -> String {
        match &self.parsed_url {
            Some(url) if url.has_host() => url.origin().ascii_serialization(),
            _ => FALLBACK_ORIGIN.to_string(),
        }
    }

    /// Resolves `value` against the page URL; returns it unchanged if that fails.
    fn absolute(&self, value: &str) -> String {
        self.parsed_url
            .as_ref()
            .and_then(|base| base.join(value.trim()).ok())
            .map(|u| u.to_string())
            .unwrap_or_else(|| value.to_string())
    }
}

/// Problem text and fix snippet of a fired rule.
pub(crate) struct Finding {
    pub(crate) problem: String,
    pub(crate) fix: String,
}

fn finding(problem: impl Into<String>, fix: impl Into<String>) -> Option<Finding> {
    Some(Finding {
        problem: problem.into(),
        fix: fix.into(),
    })
}

/// A single check: when `check` returns a finding, an issue is raised for
/// `tag` with `severity`.
pub(crate) struct Rule {
    pub(crate) tag: &'static str,
    pub(crate) severity: Severity,
    pub(crate) check: fn(&RuleContext) -> Option<Finding>,
}

/// Escapes a value for use inside a double-quoted attribute of a fix snippet.
fn attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn meta_property(property: &str, content: &str) -> String {
    format!(r#"<meta property="{}" content="{}" />"#, property, attr(content))
}

fn meta_name(name: &str, content: &str) -> String {
    format!(r#"<meta name="{}" content="{}" />"#, name, attr(content))
}

/// Parses an image dimension. `None` means "not a decimal integer", which the
/// size rule treats as too small.
fn dimension(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

pub(crate) const RULES: &[Rule] = &[
    Rule {
        tag: "og:title",
        severity: Severity::Error,
        check: |ctx| {
            if ctx.has("og:title") {
                return None;
            }
            let suggestion = ctx.get("title").unwrap_or(TITLE_PLACEHOLDER);
            finding(
                "Missing og:title. Shared links will have no headline or fall back to a guess.",
                meta_property("og:title", suggestion),
            )
        },
    },
    Rule {
        tag: "og:title",
        severity: Severity::Warning,
        check: |ctx| {
            let title = ctx.get("og:title")?;
            let len = char_len(title);
            if len <= OG_TITLE_MAX_LENGTH {
                return None;
            }
            finding(
                format!(
                    "og:title is {len} characters long; most platforms truncate after {OG_TITLE_MAX_LENGTH}."
                ),
                format!("Shorten og:title to {OG_TITLE_MAX_LENGTH} characters or fewer."),
            )
        },
    },
    Rule {
        tag: "og:description",
        severity: Severity::Error,
        check: |ctx| {
            if ctx.has("og:description") {
                return None;
            }
            let suggestion = ctx.get("description").unwrap_or(DESCRIPTION_PLACEHOLDER);
            finding(
                "Missing og:description. Previews will show no summary text.",
                meta_property("og:description", suggestion),
            )
        },
    },
    Rule {
        tag: "og:description",
        severity: Severity::Warning,
        check: |ctx| {
            let description = ctx.get("og:description")?;
            let len = char_len(description);
            if len <= OG_DESCRIPTION_MAX_LENGTH {
                return None;
            }
            finding(
                format!(
                    "og:description is {len} characters long; most platforms truncate after {OG_DESCRIPTION_MAX_LENGTH}."
                ),
                format!("Shorten og:description to {OG_DESCRIPTION_MAX_LENGTH} characters or fewer."),
            )
        },
    },
    Rule {
        tag: "og:image",
        severity: Severity::Error,
        check: |ctx| {
            if ctx.has("og:image") {
                return None;
            }
            finding(
                "Missing og:image. Links will be shared without a preview image.",
                meta_property(
                    "og:image",
                    &format!("{}{}", ctx.origin(), IMAGE_FILE_SUGGESTION),
                ),
            )
        },
    },
    Rule {
        tag: "og:image",
        severity: Severity::Error,
        check: |ctx| {
            let image = ctx.get("og:image")?;
            if image.starts_with("http") {
                return None;
            }
            finding(
                format!("og:image must be an absolute URL, found \"{image}\"."),
                meta_property("og:image", &ctx.absolute(image)),
            )
        },
    },
    Rule {
        tag: "og:image:width/height",
        severity: Severity::Warning,
        check: |ctx| {
            ctx.get("og:image")?;
            let missing: Vec<&str> = ["og:image:width", "og:image:height"]
                .into_iter()
                .filter(|key| !ctx.has(key))
                .collect();
            if missing.is_empty() {
                return None;
            }
            finding(
                format!(
                    "Missing {}. Some platforms skip the image on first share until they have measured it.",
                    missing.join(" and ")
                ),
                format!(
                    "{}\n{}",
                    meta_property("og:image:width", "1200"),
                    meta_property("og:image:height", "630")
                ),
            )
        },
    },
    Rule {
        tag: "og:image",
        severity: Severity::Warning,
        check: |ctx| {
            let width = ctx.get("og:image:width")?;
            let height = ctx.get("og:image:height")?;
            let too_small = |v: &str| dimension(v).map_or(true, |n| n < MIN_IMAGE_DIMENSION);
            if !too_small(width) && !too_small(height) {
                return None;
            }
            finding(
                format!(
                    "og:image is {width}x{height}; images under {MIN_IMAGE_DIMENSION}x{MIN_IMAGE_DIMENSION} are not shown as large previews."
                ),
                "Use an image of at least 1200x630 pixels.",
            )
        },
    },
    Rule {
        tag: "og:image:alt",
        severity: Severity::Info,
        check: |ctx| {
            ctx.get("og:image")?;
            if ctx.has("og:image:alt") {
                return None;
            }
            finding(
                "Missing og:image:alt. Screen readers cannot describe the preview image.",
                meta_property("og:image:alt", IMAGE_ALT_PLACEHOLDER),
            )
        },
    },
    Rule {
        tag: "og:url",
        severity: Severity::Warning,
        check: |ctx| {
            if ctx.has("og:url") {
                return None;
            }
            finding(
                "Missing og:url. Shares of the same page under different URLs will not be grouped.",
                meta_property("og:url", ctx.page_url),
            )
        },
    },
    Rule {
        tag: "og:type",
        severity: Severity::Info,
        check: |ctx| {
            if ctx.has("og:type") {
                return None;
            }
            finding(
                "Missing og:type. Platforms assume \"website\".",
                meta_property("og:type", "website"),
            )
        },
    },
    Rule {
        tag: "twitter:card",
        severity: Severity::Warning,
        check: |ctx| {
            if ctx.has("twitter:card") {
                return None;
            }
            let card = if ctx.has("og:image") {
                "summary_large_image"
            } else {
                "summary"
            };
            finding(
                "Missing twitter:card. X/Twitter will use a small summary card or no card at all.",
                meta_name("twitter:card", card),
            )
        },
    },
    Rule {
        tag: "twitter:title",
        severity: Severity::Error,
        check: |ctx| {
            if ctx.has("twitter:title") || ctx.has("og:title") {
                return None;
            }
            let suggestion = ctx.get("title").unwrap_or(TITLE_PLACEHOLDER);
            finding(
                "No twitter:title and no og:title to fall back on. X/Twitter cards will have no title.",
                meta_name("twitter:title", suggestion),
            )
        },
    },
    Rule {
        tag: "twitter:image",
        severity: Severity::Warning,
        check: |ctx| {
            if ctx.has("twitter:image") || ctx.has("og:image") {
                return None;
            }
            finding(
                "No twitter:image and no og:image to fall back on. X/Twitter cards will have no image.",
                meta_name(
                    "twitter:image",
                    &format!("{}{}", ctx.origin(), IMAGE_FILE_SUGGESTION),
                ),
            )
        },
    },
    Rule {
        tag: "title",
        severity: Severity::Warning,
        check: |ctx| {
            if ctx.has("title") {
                return None;
            }
            let suggestion = ctx.get("og:title").unwrap_or(TITLE_PLACEHOLDER);
            finding(
                "Missing <title>. Browsers, search engines and some chat apps rely on it.",
                format!("<title>{}</title>", attr(suggestion)),
            )
        },
    },
    Rule {
        tag: "description",
        severity: Severity::Info,
        check: |ctx| {
            if ctx.has("description") {
                return None;
            }
            let suggestion = ctx
                .get("og:description")
                .unwrap_or(DESCRIPTION_PLACEHOLDER);
            finding(
                "Missing meta description. Search results and some previews use it.",
                meta_name("description", suggestion),
            )
        },
    },
    Rule {
        tag: "canonical",
        severity: Severity::Info,
        check: |ctx| {
            if ctx.has("canonical") {
                return None;
            }
            finding(
                "Missing canonical link. Duplicate URLs of this page may split share counts.",
                format!(r#"<link rel="canonical" href="{}" />"#, attr(ctx.page_url)),
            )
        },
    },
];
