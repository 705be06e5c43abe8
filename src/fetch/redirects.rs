//! HTTP redirect chain resolution.
//!
//! Redirects are followed manually so hops can be counted and relative
//! `Location` headers resolved against the URL that produced them.

use log::{debug, warn};
use reqwest::Url;

use super::request::{extract_response_headers, RequestHeaders};
use super::FetchedPage;
use crate::error_handling::{categorize_reqwest_error, FetchError};

/// Fetches `start_url`, following up to `max_hops` redirects.
///
/// Any 3xx response carrying a `Location` header counts as a redirect. A 3xx
/// without `Location` is treated as the final response.
///
/// # Arguments
///
/// * `client` - HTTP client with redirects disabled
/// * `start_url` - The initial URL
/// * `max_hops` - Maximum number of redirects to follow
///
/// # Errors
///
/// - `FetchError::TooManyRedirects` when redirect number `max_hops + 1` is received
/// - `FetchError::InvalidRedirect` when a `Location` cannot be resolved to a URL
/// - transport errors as categorized by `categorize_reqwest_error`
pub async fn follow_redirects(
    client: &reqwest::Client,
    start_url: &str,
    max_hops: usize,
) -> Result<FetchedPage, FetchError> {
    let mut current =
        Url::parse(start_url).map_err(|e| FetchError::Request(format!("{start_url}: {e}")))?;
    let mut chain: Vec<String> = Vec::new();

    loop {
        chain.push(current.to_string());
        let host = current.host_str().unwrap_or_default().to_string();

        debug!("GET {current}");
        let resp = RequestHeaders::apply_to_request_builder(client.get(current.clone()))
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e, &host))?;

        let status = resp.status();
        if status.is_redirection() {
            if let Some(loc) = resp.headers().get(reqwest::header::LOCATION) {
                let hops_taken = chain.len() - 1;
                if hops_taken >= max_hops {
                    warn!("Giving up on {start_url} after {max_hops} redirects");
                    return Err(FetchError::TooManyRedirects { max: max_hops });
                }

                let loc = String::from_utf8_lossy(loc.as_bytes()).into_owned();
                // join() also accepts absolute locations unchanged
                let next = current
                    .join(loc.trim())
                    .map_err(|_| FetchError::InvalidRedirect(loc.clone()))?;
                debug!("Redirect {} {} -> {}", status.as_u16(), current, next);
                current = next;
                continue;
            }
            warn!(
                "Redirect status {} for {} but no Location header",
                status.as_u16(),
                current
            );
        }

        if !status.is_success() {
            warn!("{} responded with status {}", current, status.as_u16());
        }

        let headers = extract_response_headers(resp.headers());
        let body = resp
            .text()
            .await
            .map_err(|e| categorize_reqwest_error(&e, &host))?;

        return Ok(FetchedPage {
            final_url: current.to_string(),
            status: status.as_u16(),
            headers,
            body,
            redirect_chain: chain,
        });
    }
}
