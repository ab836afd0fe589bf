//! Answer relay types: wire bodies, errors, and the upstream trait.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while relaying a question to the answer service.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    /// `ANSWER_SERVICE_URL` is not set.
    #[error("missing answer service url: env var {var} not set")]
    MissingServiceUrl { var: String },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request to the answer service failed before a response arrived.
    #[error("answer request failed: {0}")]
    Request(String),

    /// The answer service did not respond within the request timeout.
    #[error("answer request timed out")]
    Timeout,

    /// The answer service returned a non-success HTTP status.
    #[error("answer response error: status {status}")]
    Response { status: u16, body: String },

    /// The answer service body was not `{ "answer": <string> }`.
    #[error("answer response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// WIRE BODIES
// =============================================================================

/// Body of `POST /api/ask`, forwarded upstream unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

/// Reply body returned to the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

// =============================================================================
// ANSWER SOURCE TRAIT
// =============================================================================

/// Anything that can turn a question into an answer. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AnswerSource: Send + Sync {
    /// Ask one question and return the answer text.
    ///
    /// # Errors
    ///
    /// Returns an [`AnswerError`] if the request fails or the reply is malformed.
    async fn ask(&self, query: &str) -> Result<String, AnswerError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
