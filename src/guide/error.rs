//! Guide flow error types

use thiserror::Error;

use crate::llm::LlmError;
use crate::prompts::PromptError;

/// Errors from the guide flows
///
/// Every variant is terminal for the current call: nothing is retried and
/// no fallback value is produced.
#[derive(Debug, Error)]
pub enum GuideError {
    /// Template could not be loaded or rendered
    #[error("Prompt template error: {0}")]
    Template(#[from] PromptError),

    /// Transport or API failure, propagated unmodified
    #[error("Model call failed: {0}")]
    Llm(#[from] LlmError),

    /// The model returned no content at all
    #[error("Invalid response from the API: no content")]
    EmptyResponse,

    /// Content was present but did not decode as the expected shape
    #[error("Failed to parse the response content as {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// One answer per generated question is required
    #[error("Answer count mismatch: {questions} questions but {answers} answers")]
    AnswerCountMismatch { questions: usize, answers: usize },
}
