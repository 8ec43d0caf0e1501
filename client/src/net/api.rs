//! REST API helpers, one function per backend endpoint.
//!
//! Client-side (hydrate): real HTTP calls via the [`super::http`] wrapper.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Underlying failure detail is logged to the console; callers receive the
//! propagated detail string and decide which static message to show.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use profiles::{ChatReply, ChatRequest, NetworkGraph};

pub const IMPORT_ENDPOINT: &str = "/import_articles/";
pub const NETWORK_ENDPOINT: &str = "/fetch_network/";
pub const CHAT_ENDPOINT: &str = "/chat/";
pub const USAGE_LOG_ENDPOINT: &str = "/chat/stream_log";

#[cfg(not(feature = "hydrate"))]
const SSR_STUB_ERROR: &str = "not available on server";

/// Trigger the one-shot article import via `GET /import_articles/`.
/// Returns the number of imported articles.
///
/// # Errors
///
/// Returns the failure detail string; the detail is also logged.
pub async fn import_articles() -> Result<u64, String> {
    #[cfg(feature = "hydrate")]
    {
        match super::http::get_json::<u64>(IMPORT_ENDPOINT).await {
            Ok(count) => Ok(count),
            Err(detail) => {
                log::error!("import articles request failed: {detail}");
                Err(detail)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SSR_STUB_ERROR.to_owned())
    }
}

/// Fetch the network visualization payload via `GET /fetch_network/`.
///
/// # Errors
///
/// Returns the failure detail string; the detail is also logged.
pub async fn fetch_network() -> Result<NetworkGraph, String> {
    #[cfg(feature = "hydrate")]
    {
        match super::http::get_json::<NetworkGraph>(NETWORK_ENDPOINT).await {
            Ok(graph) => Ok(graph),
            Err(detail) => {
                log::error!("fetch network request failed: {detail}");
                Err(detail)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SSR_STUB_ERROR.to_owned())
    }
}

/// Send one chat turn via `POST /chat/`.
///
/// # Errors
///
/// Returns the failure detail string; the detail is also logged.
pub async fn send_chat(request: &ChatRequest) -> Result<ChatReply, String> {
    #[cfg(feature = "hydrate")]
    {
        match super::http::post_json::<ChatReply>(CHAT_ENDPOINT, request).await {
            Ok(reply) => Ok(reply),
            Err(detail) => {
                log::error!("chat request failed: {detail}");
                Err(detail)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(SSR_STUB_ERROR.to_owned())
    }
}

/// Fetch the token-usage summary via `GET /chat/stream_log`.
///
/// # Errors
///
/// Returns the failure detail string.
pub async fn fetch_usage_log() -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        super::http::get_text(USAGE_LOG_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SSR_STUB_ERROR.to_owned())
    }
}
