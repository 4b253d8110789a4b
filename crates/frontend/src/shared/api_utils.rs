//! API utilities for talking to the condominium server
//!
//! The UI is served by the same origin as the JSON endpoints, so URLs are
//! built from `window.location.origin`.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why an endpoint did not produce the expected JSON
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("no response after {0} ms")]
    Timeout(u32),
}

/// Origin of the current page, e.g. "https://condominio.example"
///
/// Empty when there is no window (native tests).
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from an absolute path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/viviendas/api/edificios/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET `url` and decode the body as `T`
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .header("X-Requested-With", "XMLHttpRequest")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}
