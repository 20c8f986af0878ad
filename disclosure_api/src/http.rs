//! Request plumbing shared by both upstream clients.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::Error;

/// Upstream bodies are cut to this many characters before they are logged
/// or surfaced to callers.
const MAX_BODY_CHARS: usize = 200;

/// Builds a fresh client for a single call. Proxy settings from the
/// environment are ignored.
pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::RequestFailed(e.to_string())
        })
}

/// Sends the request and returns the raw body of a 2xx response.
pub(crate) async fn send(request: reqwest::RequestBuilder) -> Result<Vec<u8>, Error> {
    let resp = request.send().await.map_err(|e| {
        tracing::error!("Failed to get resource: {}", e);
        Error::RequestFailed(e.to_string())
    })?;

    let status = resp.status();
    let body = resp.bytes().await.map_err(|e| {
        tracing::error!("Failed to read response body: {}", e);
        Error::RequestFailed(e.to_string())
    })?;

    if !status.is_success() {
        let snippet = truncate_body(&String::from_utf8_lossy(&body));
        tracing::error!("Request failed with status {}: {}", status, snippet);
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            body: snippet,
        });
    }

    Ok(body.to_vec())
}

/// Sends the request and decodes a 2xx JSON body.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, Error> {
    let body = send(request).await?;
    serde_json::from_slice::<T>(&body).map_err(|e| {
        let snippet = truncate_body(&String::from_utf8_lossy(&body));
        tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
        Error::InvalidResponse(e.to_string())
    })
}

pub(crate) fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_BODY_CHARS) {
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
        None => body.to_string(),
    }
}
