//! Wire DTOs for the `/api/ask` exchange.
//!
//! DESIGN
//! ======
//! These mirror the relay's request/response bodies exactly. Anything that
//! does not decode into [`AskResponse`] is treated as a failed send.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/ask`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

/// Successful response from `POST /api/ask`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}
