//! `POST /api/ask`: relay one widget question to the answer service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::answer::AnswerSource;
use crate::answer::types::{AnswerError, AskRequest, AskResponse};
use crate::state::AppState;

/// Forward `{ query }` upstream and return `{ answer }`.
pub async fn ask(State(state): State<AppState>, Json(req): Json<AskRequest>) -> Result<Json<AskResponse>, StatusCode> {
    let Some(answer) = state.answer.as_ref() else {
        tracing::warn!("ask rejected: answer relay not configured");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let query = req.query.trim();
    if query.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    tracing::info!(query_len = query.len(), "relaying question");
    match answer.ask(query).await {
        Ok(text) => {
            tracing::info!(answer_len = text.len(), "answer relayed");
            Ok(Json(AskResponse { answer: text }))
        }
        Err(e) => {
            tracing::warn!(error = %e, "answer relay failed");
            Err(answer_error_to_status(&e))
        }
    }
}

pub(crate) fn answer_error_to_status(err: &AnswerError) -> StatusCode {
    match err {
        AnswerError::Request(_) | AnswerError::Response { .. } | AnswerError::Parse(_) => StatusCode::BAD_GATEWAY,
        AnswerError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        AnswerError::MissingServiceUrl { .. } | AnswerError::ConfigParse(_) | AnswerError::HttpClientBuild(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "ask_test.rs"]
mod tests;
