//! Shared HTTP client and degrade-to-none request helpers.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

const USER_AGENT: &str = concat!("InfoNexus/", env!("CARGO_PKG_VERSION"));

/// Builds the shared client used by every provider call.
///
/// # Errors
///
/// Returns the underlying builder error if the TLS backend fails to
/// initialize.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Sends a request and decodes a JSON payload, degrading every failure mode
/// to `None`.
pub(crate) async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Option<T> {
    let response = match request.send().await {
        Ok(response) => response,
        Err(error) => {
            debug!(%error, "provider request failed");
            return None;
        }
    };
    if !response.status().is_success() {
        debug!(status = %response.status(), "provider returned non-success status");
        return None;
    }
    match response.json::<T>().await {
        Ok(payload) => Some(payload),
        Err(error) => {
            debug!(%error, "provider payload was malformed");
            None
        }
    }
}

/// Sends a request and returns the plain-text body, degrading every failure
/// mode to `None`.
pub(crate) async fn fetch_text(request: RequestBuilder) -> Option<String> {
    let response = match request.send().await {
        Ok(response) => response,
        Err(error) => {
            debug!(%error, "provider request failed");
            return None;
        }
    };
    if !response.status().is_success() {
        debug!(status = %response.status(), "provider returned non-success status");
        return None;
    }
    match response.text().await {
        Ok(body) if !body.is_empty() => Some(body),
        Ok(_) => None,
        Err(error) => {
            debug!(%error, "provider body could not be read");
            None
        }
    }
}
