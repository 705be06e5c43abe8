//! og_check library: social-sharing metadata checks for a single web page.
//!
//! A check fetches the page (following up to five redirects within one
//! deadline), extracts its Open Graph, Twitter Card and standard HTML
//! metadata, and validates it against a fixed, ordered rule set.
//!
//! # Example
//!
//! ```no_run
//! use og_check::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let result = run_check(&config).await?;
//! println!("{} issue(s), valid: {}", result.issues.len(), result.is_valid());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
pub mod error_handling;
mod fetch;
pub mod initialization;
mod models;
pub mod parse;
pub mod report;
mod utils;
pub mod validate;

// Re-export public API
pub use app::validate_and_normalize_url;
pub use config::{Config, LogFormat, LogLevel, Opt, OutputFormat};
pub use error_handling::{CheckError, FetchError, UsageError};
pub use fetch::{fetch_page, FetchedPage};
pub use models::{CheckResult, IssueSummary, MetadataMap};
pub use parse::extract_metadata;
pub use run::{evaluate_exit_code, run_check};
pub use validate::{validate, Issue, Severity};

// Internal run module (the fetch -> extract -> validate pipeline)
mod run {
    use std::time::Duration;

    use log::info;

    use crate::app::validate_and_normalize_url;
    use crate::config::Config;
    use crate::error_handling::CheckError;
    use crate::fetch::fetch_page;
    use crate::initialization::init_client;
    use crate::models::CheckResult;
    use crate::parse::extract_metadata;
    use crate::validate::validate;

    /// Runs one check with the provided configuration.
    ///
    /// This is the main entry point for the library: it normalizes the URL,
    /// fetches the page, extracts its metadata and validates it. Validation
    /// findings are part of the returned `CheckResult`, never errors.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The URL is missing or invalid (`CheckError::Usage`, no request is made)
    /// - The HTTP client cannot be built (`CheckError::Initialization`)
    /// - The fetch fails: network error, timeout, or too many redirects
    ///   (`CheckError::Fetch`)
    pub async fn run_check(config: &Config) -> Result<CheckResult, CheckError> {
        let url = validate_and_normalize_url(&config.url)?;
        if !config.extra_options.is_empty() {
            log::debug!("Ignoring extra options: {:?}", config.extra_options);
        }

        let client = init_client(config)?;
        info!("Checking {} (timeout {}ms)", url, config.timeout_ms);
        let page = fetch_page(&client, &url, Duration::from_millis(config.timeout_ms)).await?;

        let tags = extract_metadata(&page.body);
        let issues = validate(&tags, &page.final_url);
        info!(
            "Found {} tag(s) and {} issue(s) on {}",
            tags.len(),
            issues.len(),
            page.final_url
        );

        Ok(CheckResult {
            final_url: page.final_url,
            tags,
            issues,
        })
    }

    /// Maps a check result to the process exit code.
    ///
    /// Returns 1 only in CI mode with at least one error-severity issue;
    /// warnings and info never fail a run.
    pub fn evaluate_exit_code(result: &CheckResult, ci: bool) -> i32 {
        if ci && !result.is_valid() {
            1
        } else {
            0
        }
    }
}
