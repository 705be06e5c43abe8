//! Main application modules.
//!
//! This module provides the URL validation used before any network call.

pub mod url;

// Re-export public API
pub use url::validate_and_normalize_url;
