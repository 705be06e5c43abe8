//! Page fetching.
//!
//! This module issues the single GET of a run: browser-like request headers,
//! manual redirect following capped at `MAX_REDIRECT_HOPS`, and one deadline
//! covering the whole chain.

mod redirects;
mod request;

use std::collections::BTreeMap;
use std::time::Duration;

use log::{info, warn};

use crate::config::MAX_REDIRECT_HOPS;
use crate::error_handling::FetchError;

pub use redirects::follow_redirects;

/// The final response of a fetch.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL of the response that was not a redirect
    pub final_url: String,
    /// HTTP status of the final response
    pub status: u16,
    /// Final response headers, keyed by lower-cased name
    pub headers: BTreeMap<String, String>,
    /// Response body decoded as text
    pub body: String,
    /// Every URL requested, starting URL first and final URL last
    pub redirect_chain: Vec<String>,
}

/// Fetches a page, following redirects, within `timeout`.
///
/// The deadline covers every redirect hop and the body download. When it
/// expires the in-flight request is dropped (aborting it) and
/// `FetchError::Timeout` is returned.
///
/// # Errors
///
/// See `follow_redirects`, plus `FetchError::Timeout`.
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<FetchedPage, FetchError> {
    match tokio::time::timeout(timeout, follow_redirects(client, url, MAX_REDIRECT_HOPS)).await {
        Ok(Ok(page)) => {
            info!(
                "Fetched {} ({} bytes, status {}, {} redirect(s))",
                page.final_url,
                page.body.len(),
                page.status,
                page.redirect_chain.len() - 1
            );
            Ok(page)
        }
        Ok(Err(e)) => Err(e),
        Err(_) => {
            warn!("Fetching {} exceeded {}ms", url, timeout.as_millis());
            Err(FetchError::Timeout)
        }
    }
}
