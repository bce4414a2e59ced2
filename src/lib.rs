//! FoodGuide - prompt-driven food questionnaire flows
//!
//! FoodGuide sequences three chat-completion calls to build a personalized
//! food guide: generate option choices from free-form user input, generate
//! one follow-up question per selected option, then generate a final
//! recommendation from the answer transcript.
//!
//! # Core Concepts
//!
//! - **Stateless flows**: every entity lives for one request chain and is
//!   discarded once the caller has it
//! - **Injected client**: flows hold an `Arc<dyn LlmClient>` handed in at
//!   construction, so tests substitute a double and nothing lives in
//!   process-wide state
//! - **Structured output**: each flow sends a named JSON schema with the
//!   request and decodes the response into a typed result
//! - **Templates as files**: prompts are `.pmt` files rendered with
//!   Handlebars, overridable per deployment, with embedded defaults
//!
//! # Modules
//!
//! - [`guide`] - the three flow entry points and their domain types
//! - [`llm`] - chat-completion client trait and OpenAI implementation
//! - [`prompts`] - template loading and rendering
//! - [`config`] - configuration types and loading

pub mod config;
pub mod guide;
pub mod llm;
pub mod prompts;

// Re-export commonly used types
pub use config::{Config, LlmConfig, PromptsConfig};
pub use guide::{FinalOutput, FoodGuide, GuideError, GuideOptions, GuideQuestions, Question};
pub use llm::{
    CompletionRequest, CompletionResponse, LlmClient, LlmError, Message, OpenAIClient, ResponseSchema, Role,
    StopReason, TokenUsage, create_client,
};
pub use prompts::{GuideTemplate, PromptError, PromptLoader};
