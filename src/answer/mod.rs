//! Answer relay: forwards widget questions to the upstream answer service.
//!
//! DESIGN
//! ======
//! The widget only ever talks to its own origin at `/api/ask`. This module
//! owns the one outbound HTTP call that stands behind that path. It is
//! stateless: each question is forwarded once, with no history, retry or
//! queueing. `AnswerClient` is the production [`AnswerSource`]; handlers hold
//! it as `Arc<dyn AnswerSource>` so tests can swap in mocks.

pub mod config;
pub mod types;

use config::AnswerConfig;
use types::{AnswerError, AskRequest, AskResponse};
pub use types::AnswerSource;

/// HTTP client for the upstream answer endpoint.
pub struct AnswerClient {
    http: reqwest::Client,
    service_url: String,
}

impl AnswerClient {
    /// Build an answer client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ANSWER_SERVICE_URL` is missing or invalid, or the
    /// HTTP client fails to build.
    pub fn from_env() -> Result<Self, AnswerError> {
        Self::from_config(AnswerConfig::from_env()?)
    }

    /// Build an answer client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: AnswerConfig) -> Result<Self, AnswerError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| AnswerError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, service_url: config.service_url })
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }
}

#[async_trait::async_trait]
impl AnswerSource for AnswerClient {
    async fn ask(&self, query: &str) -> Result<String, AnswerError> {
        let body = AskRequest { query: query.to_owned() };
        let response = self
            .http
            .post(&self.service_url)
            .json(&body)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        let text = response.text().await.map_err(request_error)?;
        if !status.is_success() {
            return Err(AnswerError::Response { status: status.as_u16(), body: text });
        }
        parse_answer_body(&text)
    }
}

fn request_error(err: reqwest::Error) -> AnswerError {
    if err.is_timeout() { AnswerError::Timeout } else { AnswerError::Request(err.to_string()) }
}

/// Extract the answer text from an upstream response body.
///
/// # Errors
///
/// Returns [`AnswerError::Parse`] unless the body is JSON with a string `answer`.
pub fn parse_answer_body(text: &str) -> Result<String, AnswerError> {
    serde_json::from_str::<AskResponse>(text)
        .map(|resp| resp.answer)
        .map_err(|e| AnswerError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
