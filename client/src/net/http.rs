//! HTTP client wrapper.
//!
//! Joins the configured API base with a relative path and sends JSON
//! requests with default headers. No retries, no auth injection, no timeout
//! beyond the platform default. One network call per invocation, with the
//! failure propagated to the caller.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

/// Origin prefix for API calls. Empty means same-origin, which is the
/// production layout (the server serves both the app and the API).
pub const API_BASE: &str = "";

/// Join the API base with a relative path, avoiding doubled slashes.
#[must_use]
pub fn api_url(path: &str) -> String {
    join_url(API_BASE, path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// `GET` a JSON endpoint.
///
/// # Errors
///
/// Returns a message string on transport failure, non-2xx status, or a
/// body that does not decode as `T`.
#[cfg(feature = "hydrate")]
pub async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// `GET` a plain-text endpoint.
///
/// # Errors
///
/// Returns a message string on transport failure or non-2xx status.
#[cfg(feature = "hydrate")]
pub async fn get_text(path: &str) -> Result<String, String> {
    let resp = gloo_net::http::Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.text().await.map_err(|e| e.to_string())
}

/// `POST` a JSON body and decode a JSON response.
///
/// # Errors
///
/// Returns a message string on serialization failure, transport failure,
/// non-2xx status, or a body that does not decode as `T`.
#[cfg(feature = "hydrate")]
pub async fn post_json<T: serde::de::DeserializeOwned>(
    path: &str,
    body: &impl serde::Serialize,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}
