//! Error type definitions.
//!
//! This module defines the error types used throughout the application.
//! Validation findings are not errors; they are `Issue` values.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Problems with the command line that prevent any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// No URL argument was given.
    #[error("Missing URL argument")]
    MissingUrl,

    /// The URL does not parse (after adding a scheme if needed).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The URL exceeds `MAX_URL_LENGTH`.
    #[error("URL is too long ({0} characters)")]
    UrlTooLong(usize),

    /// The URL uses something other than http or https.
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Failures while fetching the target page.
///
/// Every variant is terminal for the invocation; nothing is retried.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The overall fetch deadline expired (all redirect hops included).
    #[error("Request timed out")]
    Timeout,

    /// More than `max` redirect responses in a row.
    #[error("Too many redirects (more than {max})")]
    TooManyRedirects {
        /// Redirect cap that was exceeded
        max: usize,
    },

    /// The host name could not be resolved.
    #[error("DNS lookup failed for {host}: {message}")]
    Dns {
        /// Host that failed to resolve
        host: String,
        /// Underlying error message
        message: String,
    },

    /// The TCP/TLS connection could not be established.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The response body could not be read or decoded as text.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// A redirect pointed at a location that is not a valid URL.
    #[error("Invalid redirect location: {0}")]
    InvalidRedirect(String),

    /// Any other transport error.
    #[error("Request failed: {0}")]
    Request(String),
}

impl FetchError {
    /// Extra guidance shown below the error message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            FetchError::Dns { .. } => {
                Some("Could not resolve the host name. Check the domain for typos and that it is publicly reachable.")
            }
            _ => None,
        }
    }
}

/// Any failure of a complete check run.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The URL was rejected before any network call.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// The HTTP client could not be built.
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// The page could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
