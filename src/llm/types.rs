//! LLM request/response types
//!
//! These types model the OpenAI Chat Completions API but are kept small and
//! provider-agnostic: role-plus-text messages, a separate system prompt, and
//! an optional named response schema for structured output.

use serde::{Deserialize, Serialize};

/// A completion request - everything needed for one model call
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System prompt (base instruction plus any caller condition)
    pub system_prompt: String,

    /// User messages (each guide flow sends exactly one)
    pub messages: Vec<Message>,

    /// Max tokens for the response (from config)
    pub max_tokens: u32,

    /// Schema the response must conform to, when structured output is wanted
    pub response_schema: Option<ResponseSchema>,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
        }
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A named JSON schema the model response must conform to
///
/// Rendered into the `response_format` field of the Chat Completions API,
/// which makes the API layer validate the output shape before we see it.
#[derive(Debug, Clone)]
pub struct ResponseSchema {
    /// Schema name reported to the API (e.g. "food_guide_options")
    pub name: &'static str,

    /// JSON Schema describing the expected object
    pub schema: serde_json::Value,
}

impl ResponseSchema {
    pub fn new(name: &'static str, schema: serde_json::Value) -> Self {
        Self { name, schema }
    }

    /// Render as an OpenAI `response_format` value
    pub fn to_openai_format(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "json_schema",
            "json_schema": {
                "name": self.name,
                "strict": true,
                "schema": self.schema,
            }
        })
    }
}

/// Why the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    Other,
}

impl StopReason {
    /// Map an OpenAI `finish_reason` string
    pub fn from_finish_reason(reason: Option<&str>) -> Self {
        match reason {
            Some("stop") | None => StopReason::EndTurn,
            Some("length") => StopReason::MaxTokens,
            Some(_) => StopReason::Other,
        }
    }
}

/// Token usage for a single call
#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// A completion response
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Text content, absent when the model returned nothing
    pub content: Option<String>,

    pub stop_reason: StopReason,

    pub usage: TokenUsage,
}

impl CompletionResponse {
    /// A plain text response (for tests and scripted clients)
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            stop_reason: StopReason::EndTurn,
            usage: TokenUsage::default(),
        }
    }

    /// A response with no content at all
    pub fn empty() -> Self {
        Self {
            content: None,
            stop_reason: StopReason::EndTurn,
            usage: TokenUsage::default(),
        }
    }
}
