//! URL validation and normalization utilities.

use log::debug;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::UsageError;

/// Validates and normalizes the target URL.
///
/// Adds an `https://` prefix if no http(s) scheme is present, then validates that
/// the URL is syntactically valid, uses an http/https scheme and has a host.
/// Rejects URLs longer than `MAX_URL_LENGTH`.
///
/// # Arguments
///
/// * `url` - The URL string as given on the command line
///
/// # Returns
///
/// The normalized URL, or the `UsageError` explaining why it was rejected.
pub fn validate_and_normalize_url(url: &str) -> Result<String, UsageError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(UsageError::MissingUrl);
    }

    let lower = url.to_ascii_lowercase();
    let normalized = if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else if let Some((scheme, _)) = url.split_once("://") {
        // An explicit scheme other than http(s); prefixing would hide the mistake
        return Err(UsageError::UnsupportedScheme(scheme.to_string()));
    } else {
        format!("https://{url}")
    };

    // Checked after normalization since the prefix adds characters
    if normalized.len() > MAX_URL_LENGTH {
        return Err(UsageError::UrlTooLong(normalized.len()));
    }

    let parsed =
        url::Url::parse(&normalized).map_err(|_| UsageError::InvalidUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(UsageError::UnsupportedScheme(other.to_string())),
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(UsageError::InvalidUrl(url.to_string()));
    }

    debug!("Normalized URL {url} -> {normalized}");
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::validate_and_normalize_url;
    use crate::error_handling::UsageError;

    #[test]
    fn test_validate_and_normalize_url_adds_https() {
        let result = validate_and_normalize_url("example.com");
        assert_eq!(result, Ok("https://example.com".to_string()));
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_https() {
        let result = validate_and_normalize_url("https://example.com");
        assert_eq!(result, Ok("https://example.com".to_string()));
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_http() {
        let result = validate_and_normalize_url("http://example.com");
        assert_eq!(result, Ok("http://example.com".to_string()));
    }

    #[test]
    fn test_validate_and_normalize_url_trims_whitespace() {
        let result = validate_and_normalize_url("  example.com/page  ");
        assert_eq!(result, Ok("https://example.com/page".to_string()));
    }

    #[test]
    fn test_validate_and_normalize_url_empty_is_missing() {
        assert_eq!(validate_and_normalize_url(""), Err(UsageError::MissingUrl));
        assert_eq!(validate_and_normalize_url("   "), Err(UsageError::MissingUrl));
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_invalid_url() {
        let result = validate_and_normalize_url("not a valid url!!!");
        assert!(matches!(result, Err(UsageError::InvalidUrl(_))));
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_unsupported_scheme() {
        let result = validate_and_normalize_url("ftp://example.com");
        assert_eq!(result, Err(UsageError::UnsupportedScheme("ftp".to_string())));
    }

    #[test]
    fn test_validate_and_normalize_url_with_path_and_port() {
        assert_eq!(
            validate_and_normalize_url("example.com:8080/path?query=value"),
            Ok("https://example.com:8080/path?query=value".to_string())
        );
    }

    #[test]
    fn test_validate_and_normalize_url_too_long() {
        let long = format!("example.com/{}", "a".repeat(2100));
        assert!(matches!(
            validate_and_normalize_url(&long),
            Err(UsageError::UrlTooLong(_))
        ));
    }
}
