//! Configuration constants.
//!
//! This module defines the constants used throughout the application:
//! network limits, request headers and the thresholds applied by the
//! metadata rules.

// Network limits
/// Default overall fetch timeout in milliseconds (covers every redirect hop)
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Maximum number of redirect hops to follow.
/// A sixth redirect response fails the fetch.
pub const MAX_REDIRECT_HOPS: usize = 5;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Default User-Agent string for HTTP requests.
///
/// Identifies the tool while staying close to what link-preview crawlers send,
/// so sites serve the same markup they would serve to a social platform.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; og_check/0.1; +https://ogp.me/) AppleWebKit/537.36 (KHTML, like Gecko)";

/// `Accept` header sent with every request
pub const ACCEPT_HEADER: &str = "text/html,application/xhtml+xml";
/// `Accept-Language` header sent with every request
pub const ACCEPT_LANGUAGE_HEADER: &str = "en-US,en;q=0.9";

// Rule thresholds
/// og:title values longer than this are truncated by most platforms
pub const OG_TITLE_MAX_LENGTH: usize = 95;
/// og:description values longer than this are truncated by most platforms
pub const OG_DESCRIPTION_MAX_LENGTH: usize = 300;
/// Minimum width and height (pixels) for a preview image
pub const MIN_IMAGE_DIMENSION: u32 = 200;

// Terminal rendering
/// Title and description width inside preview boxes
pub const PREVIEW_TEXT_WIDTH: usize = 48;
