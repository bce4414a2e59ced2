//! LlmClient trait definition

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// Stateless chat-completion client - each call is independent
///
/// This is the core abstraction for the model boundary. No conversation
/// state is kept between calls; every flow step sends its full context in
/// one request.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single completion request (suspends until complete)
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
