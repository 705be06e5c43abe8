//! Error handling.
//!
//! This module provides:
//! - Error type definitions (usage, fetch, initialization)
//! - Categorization of transport errors into `FetchError`
//!
//! Validation findings are data (`Issue`), not errors: only `--ci` turns
//! error-severity findings into a non-zero exit code.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{CheckError, FetchError, InitializationError, UsageError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message() {
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn test_too_many_redirects_message() {
        let err = FetchError::TooManyRedirects { max: 5 };
        assert_eq!(err.to_string(), "Too many redirects (more than 5)");
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_dns_error_has_hint() {
        let err = FetchError::Dns {
            host: "nope.invalid".to_string(),
            message: "dns error".to_string(),
        };
        assert!(err.to_string().contains("nope.invalid"));
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_usage_error_messages() {
        assert_eq!(UsageError::MissingUrl.to_string(), "Missing URL argument");
        assert_eq!(
            UsageError::UnsupportedScheme("ftp".to_string()).to_string(),
            "Unsupported URL scheme: ftp"
        );
    }
}
