//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no chat state; it holds only the optional answer relay.

use std::sync::Arc;

use crate::answer::AnswerSource;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Upstream answer relay. `None` if `ANSWER_SERVICE_URL` is not configured.
    pub answer: Option<Arc<dyn AnswerSource>>,
}

impl AppState {
    #[must_use]
    pub fn new(answer: Option<Arc<dyn AnswerSource>>) -> Self {
        Self { answer }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a test `AppState` with no answer relay.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None)
    }

    /// Create a test `AppState` with a mock answer source.
    #[must_use]
    pub fn test_app_state_with_answer(answer: Arc<dyn AnswerSource>) -> AppState {
        AppState::new(Some(answer))
    }
}
