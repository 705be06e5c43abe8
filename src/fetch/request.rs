//! HTTP request building and header extraction.

use std::collections::BTreeMap;

use crate::config::{ACCEPT_HEADER, ACCEPT_LANGUAGE_HEADER};

/// Request headers sent with every hop of the fetch.
///
/// The User-Agent is configured on the client itself; these are the
/// content-negotiation headers a browser-like crawler sends so servers
/// return the HTML document rather than an API or error representation.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::ACCEPT, ACCEPT_HEADER)
            .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_HEADER)
    }
}

/// Copies response headers into a map keyed by lower-cased header name.
///
/// Repeated headers are joined with `", "`; values that are not valid
/// visible ASCII are decoded lossily.
pub(crate) fn extract_response_headers(
    headers: &reqwest::header::HeaderMap,
) -> BTreeMap<String, String> {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        map.entry(name.as_str().to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    map
}
