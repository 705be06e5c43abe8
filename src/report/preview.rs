//! ASCII approximations of how each platform renders a shared link.

use colored::*;

use crate::config::PREVIEW_TEXT_WIDTH;
use crate::models::{CheckResult, MetadataMap};
use crate::utils::{char_len, non_blank, truncate_chars};

/// Inner width of a box: text plus one space of padding on each side.
const BOX_INNER_WIDTH: usize = PREVIEW_TEXT_WIDTH + 2;

/// What one platform would show for the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCard {
    pub platform: &'static str,
    /// Site line (domain or `og:site_name`)
    pub site: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// First non-blank value among `keys`.
fn first_of(tags: &MetadataMap, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| non_blank(tags.get(*k)))
        .map(str::to_string)
}

fn domain_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string()))
        .unwrap_or_else(|| url.to_string())
}

/// Builds the Twitter/X, Facebook, LinkedIn and Slack cards, applying each
/// platform's tag fallbacks.
pub fn build_previews(result: &CheckResult) -> Vec<PreviewCard> {
    let tags = &result.tags;
    let domain = domain_of(&result.final_url);

    vec![
        PreviewCard {
            platform: "Twitter/X",
            site: domain.clone(),
            title: first_of(tags, &["twitter:title", "og:title", "title"]),
            description: first_of(
                tags,
                &["twitter:description", "og:description", "description"],
            ),
            image: first_of(tags, &["twitter:image", "og:image"]),
        },
        PreviewCard {
            platform: "Facebook",
            site: domain.to_uppercase(),
            title: first_of(tags, &["og:title", "title"]),
            description: first_of(tags, &["og:description", "description"]),
            image: first_of(tags, &["og:image"]),
        },
        PreviewCard {
            platform: "LinkedIn",
            site: domain.clone(),
            title: first_of(tags, &["og:title", "title"]),
            description: first_of(tags, &["og:description", "description"]),
            image: first_of(tags, &["og:image"]),
        },
        PreviewCard {
            platform: "Slack",
            site: first_of(tags, &["og:site_name"]).unwrap_or(domain),
            title: first_of(tags, &["og:title", "title"]),
            description: first_of(tags, &["og:description", "description"]),
            image: first_of(tags, &["og:image"]),
        },
    ]
}

/// One content line, padded to the box width. Padding is computed on the
/// plain text so color codes do not skew alignment.
fn box_line(text: &str, style: impl Fn(&str) -> ColoredString) -> String {
    let text = truncate_chars(text, PREVIEW_TEXT_WIDTH);
    let pad = PREVIEW_TEXT_WIDTH.saturating_sub(char_len(&text));
    format!("| {}{} |", style(&text), " ".repeat(pad))
}

/// Renders a card as a fixed-width ASCII box.
pub fn render_preview_box(card: &PreviewCard) -> String {
    let label = format!("-- {} ", card.platform);
    let top_fill = BOX_INNER_WIDTH.saturating_sub(char_len(&label));
    let mut lines = vec![format!("+{}{}+", label, "-".repeat(top_fill))];

    let image_line = match &card.image {
        Some(image) => format!("[image] {image}"),
        None => "[no image]".to_string(),
    };
    lines.push(box_line(&image_line, |s| s.dimmed()));
    lines.push(box_line(&card.site, |s| s.dimmed()));
    lines.push(box_line(
        card.title.as_deref().unwrap_or("(no title)"),
        |s| s.bold(),
    ));
    lines.push(box_line(
        card.description.as_deref().unwrap_or("(no description)"),
        |s| s.normal(),
    ));
    lines.push(format!("+{}+", "-".repeat(BOX_INNER_WIDTH)));
    lines.join("\n")
}
