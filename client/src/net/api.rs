//! REST call used by the widget's send flow.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR) and native tests: [`ask`] returns
//! [`AskError::Unavailable`] since the request only makes sense in a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an [`AskError`]; the widget logs it and shows
//! a single fallback reply. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::AskResponse;
#[cfg(feature = "hydrate")]
use super::types::AskRequest;

/// Fixed same-origin path the widget posts questions to.
pub const ASK_ENDPOINT: &str = "/api/ask";

/// Reasons a send can fail. All of them look the same to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AskError {
    /// The request never produced a response.
    #[error("ask request failed: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("ask request failed: status {0}")]
    Status(u16),

    /// The body was not `{ "answer": <string> }`.
    #[error("ask response decode failed: {0}")]
    Decode(String),

    /// No browser to send from.
    #[error("ask not available on server")]
    Unavailable,
}

/// Decode a response body into the answer text.
///
/// # Errors
///
/// Returns [`AskError::Decode`] if the body is not JSON with a string `answer`.
pub fn decode_answer(body: &str) -> Result<String, AskError> {
    serde_json::from_str::<AskResponse>(body)
        .map(|resp| resp.answer)
        .map_err(|e| AskError::Decode(e.to_string()))
}

/// Post `query` to [`ASK_ENDPOINT`] and return the answer text.
///
/// # Errors
///
/// Returns an [`AskError`] on transport failure, non-OK status, or a body that
/// does not decode.
pub async fn ask(query: &str) -> Result<String, AskError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = AskRequest { query: query.to_owned() };
        let resp = gloo_net::http::Request::post(ASK_ENDPOINT)
            .json(&payload)
            .map_err(|e| AskError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AskError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(AskError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| AskError::Network(e.to_string()))?;
        decode_answer(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(AskError::Unavailable)
    }
}
