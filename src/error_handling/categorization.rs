//! Error categorization.
//!
//! This module maps transport errors from `reqwest` onto `FetchError`.

use std::error::Error as StdError;

use super::types::FetchError;

/// Substrings that identify a name-resolution failure in an error source chain.
///
/// hyper-util reports resolver failures as "dns error"; the system resolver's
/// own message ("failed to lookup address information") appears further down.
const DNS_ERROR_MARKERS: &[&str] = &["dns error", "failed to lookup address", "no such host"];

/// Categorizes a `reqwest::Error` into a `FetchError`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
/// * `host` - Host of the URL being fetched, used in DNS messages
pub fn categorize_reqwest_error(error: &reqwest::Error, host: &str) -> FetchError {
    let message = error_chain_message(error);

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_connect() {
        let lower = message.to_lowercase();
        if DNS_ERROR_MARKERS.iter().any(|m| lower.contains(m)) {
            FetchError::Dns {
                host: host.to_string(),
                message,
            }
        } else {
            FetchError::Connect(message)
        }
    } else if error.is_body() || error.is_decode() {
        FetchError::Body(message)
    } else {
        FetchError::Request(message)
    }
}

/// Joins an error and all of its sources into one message.
///
/// reqwest's top-level message is generic ("error sending request for url");
/// the useful detail lives in the source chain.
fn error_chain_message(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer(Inner);
    #[derive(Debug)]
    struct Inner;

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "error sending request")
        }
    }
    impl std::fmt::Display for Inner {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "dns error")
        }
    }
    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }
    impl StdError for Inner {}

    #[test]
    fn test_error_chain_message_includes_sources() {
        let message = error_chain_message(&Outer(Inner));
        assert_eq!(message, "error sending request: dns error");
    }

    #[tokio::test]
    async fn test_categorize_connection_refused() {
        // Port 1 on localhost is reserved and not listening
        let client = reqwest::Client::new();
        let err = client
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .expect_err("connection should be refused");
        match categorize_reqwest_error(&err, "127.0.0.1") {
            FetchError::Connect(_) => {}
            other => panic!("expected Connect, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_categorize_unresolvable_host_as_dns() {
        // .invalid is reserved and never resolves
        let host = "no-such-host-og-check.invalid";
        let client = reqwest::Client::new();
        let err = client
            .get(format!("http://{host}/"))
            .send()
            .await
            .expect_err("lookup should fail");
        let categorized = categorize_reqwest_error(&err, host);
        match &categorized {
            FetchError::Dns { host: h, .. } => assert_eq!(h, host),
            other => panic!("expected Dns, got {:?}", other),
        }
        assert!(categorized.hint().is_some());
    }
}
