//! Model client module
//!
//! Provides the chat-completion client abstraction and the OpenAI
//! implementation used by the guide flows.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod openai;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use openai::OpenAIClient;
pub use types::{CompletionRequest, CompletionResponse, Message, ResponseSchema, Role, StopReason, TokenUsage};

use crate::config::LlmConfig;

/// Create a model client from configuration
///
/// The client is returned as `Arc<dyn LlmClient>` so flows receive it by
/// injection and tests can substitute a double. Construction is explicit:
/// there is no process-wide client instance.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(model = %config.model, "create_client: called");
    Ok(Arc::new(OpenAIClient::from_config(config)?))
}
