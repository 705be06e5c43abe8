//! HTTP client initialization.

use crate::config::Config;
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used to fetch the target page.
///
/// Creates a `reqwest::Client` with redirects disabled so the fetch stage can
/// follow them manually, counting hops and resolving relative locations.
/// No client-level timeout is set: the fetch stage bounds the whole redirect
/// chain with a single deadline instead.
///
/// # Arguments
///
/// * `config` - Configuration containing the user-agent setting
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
