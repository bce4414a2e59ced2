//! LLM error types

use thiserror::Error;

/// Errors that can occur during model calls
///
/// Transport and API failures propagate to the caller unmodified; nothing is
/// retried or recovered at this layer.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
