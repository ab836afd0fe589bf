//! Answer relay configuration parsed from environment variables.

use std::time::Duration;

use super::types::AnswerError;

pub const ANSWER_SERVICE_URL_VAR: &str = "ANSWER_SERVICE_URL";
pub const DEFAULT_ANSWER_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_ANSWER_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl AnswerTimeouts {
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

impl Default for AnswerTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_ANSWER_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_ANSWER_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerConfig {
    pub service_url: String,
    pub timeouts: AnswerTimeouts,
}

impl AnswerConfig {
    /// Build typed relay config from environment variables.
    ///
    /// Required:
    /// - `ANSWER_SERVICE_URL`: absolute http(s) URL of the upstream endpoint
    ///
    /// Optional:
    /// - `ANSWER_REQUEST_TIMEOUT_SECS`: default 120
    /// - `ANSWER_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, AnswerError> {
        let raw = std::env::var(ANSWER_SERVICE_URL_VAR)
            .map_err(|_| AnswerError::MissingServiceUrl { var: ANSWER_SERVICE_URL_VAR.into() })?;
        let service_url = parse_service_url(&raw)?;
        let timeouts = AnswerTimeouts {
            request_secs: env_parse_u64("ANSWER_REQUEST_TIMEOUT_SECS", DEFAULT_ANSWER_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("ANSWER_CONNECT_TIMEOUT_SECS", DEFAULT_ANSWER_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { service_url, timeouts })
    }
}

/// Read a numeric env var, falling back to `default` when unset or unparsable.
pub fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_service_url(raw: &str) -> Result<String, AnswerError> {
    let trimmed = raw.trim();
    let url = reqwest::Url::parse(trimmed)
        .map_err(|e| AnswerError::ConfigParse(format!("invalid {ANSWER_SERVICE_URL_VAR} '{trimmed}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(AnswerError::ConfigParse(format!(
            "unsupported {ANSWER_SERVICE_URL_VAR} scheme '{other}' (expected 'http' or 'https')"
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
