//! OpenAI API client implementation
//!
//! Implements the LlmClient trait for OpenAI's Chat Completions API with
//! schema-constrained (structured) output support.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use super::{CompletionRequest, CompletionResponse, LlmClient, LlmError, StopReason, TokenUsage};
use crate::config::LlmConfig;

/// OpenAI Chat Completions client
///
/// Also works against OpenAI-compatible endpoints via the configured base
/// URL. Each call is a single attempt: transport and API errors propagate
/// to the caller unmodified.
pub struct OpenAIClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
}

impl OpenAIClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in config. The
    /// configured timeout applies to the whole HTTP client; there is no
    /// per-call deadline beyond it.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(model = %config.model, "from_config: called");
        let api_key = config
            .get_api_key()
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_tokens: config.max_tokens,
        })
    }

    /// Build the request body for the OpenAI API
    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        debug!(%self.model, %request.max_tokens, "build_request_body: called");

        let mut messages = vec![serde_json::json!({
            "role": "system",
            "content": request.system_prompt,
        })];

        messages.extend(request.messages.iter().map(|m| {
            serde_json::json!({
                "role": m.role.as_str(),
                "content": m.content,
            })
        }));

        let mut body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": request.max_tokens.min(self.max_tokens),
        });

        if let Some(schema) = &request.response_schema {
            body["response_format"] = schema.to_openai_format();
        }

        body
    }

    /// Map the OpenAI API response onto a CompletionResponse
    fn parse_response(&self, api_response: OpenAIResponse) -> CompletionResponse {
        let choice = api_response.choices.into_iter().next();

        let (content, stop_reason) = match choice {
            Some(c) => {
                let stop_reason = StopReason::from_finish_reason(c.finish_reason.as_deref());
                (c.message.content, stop_reason)
            }
            None => (None, StopReason::EndTurn),
        };

        CompletionResponse {
            content,
            stop_reason,
            usage: TokenUsage {
                input_tokens: api_response.usage.prompt_tokens,
                output_tokens: api_response.usage.completion_tokens,
            },
        }
    }
}

#[async_trait]
impl LlmClient for OpenAIClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        debug!(%self.model, "complete: called");
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = self.build_request_body(&request);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!(%status, "complete: API error");
            return Err(LlmError::ApiError { status, message: text });
        }

        let api_response: OpenAIResponse = response.json().await?;
        let parsed = self.parse_response(api_response);
        info!(
            model = %self.model,
            input_tokens = %parsed.usage.input_tokens,
            output_tokens = %parsed.usage.output_tokens,
            "complete: success"
        );
        Ok(parsed)
    }
}

// OpenAI API response types

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
    usage: OpenAIUsage,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{Message, ResponseSchema};

    fn test_client(max_tokens: u32) -> OpenAIClient {
        OpenAIClient {
            model: "gpt-4o-2024-08-06".to_string(),
            api_key: "test-key".to_string(),
            base_url: "https://api.openai.com".to_string(),
            http: Client::new(),
            max_tokens,
        }
    }

    #[test]
    fn test_build_request_body_basic() {
        let client = test_client(8192);

        let request = CompletionRequest {
            system_prompt: "You are helpful".to_string(),
            messages: vec![Message::user("Hello")],
            max_tokens: 1000,
            response_schema: None,
        };

        let body = client.build_request_body(&request);

        assert_eq!(body["model"], "gpt-4o-2024-08-06");
        assert_eq!(body["max_tokens"], 1000);
        assert!(body["messages"].is_array());
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "You are helpful");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Hello");
        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn test_build_request_body_with_schema() {
        let client = test_client(8192);

        let request = CompletionRequest {
            system_prompt: "You are helpful".to_string(),
            messages: vec![Message::user("Hello")],
            max_tokens: 1000,
            response_schema: Some(ResponseSchema::new(
                "food_guide_options",
                serde_json::json!({ "type": "object" }),
            )),
        };

        let body = client.build_request_body(&request);

        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["name"], "food_guide_options");
    }

    #[test]
    fn test_max_tokens_capped() {
        let client = test_client(1000);

        let request = CompletionRequest {
            system_prompt: "Test".to_string(),
            messages: vec![],
            max_tokens: 5000,
            response_schema: None,
        };

        let body = client.build_request_body(&request);
        assert_eq!(body["max_tokens"], 1000);
    }

    #[test]
    fn test_parse_response_with_content() {
        let client = test_client(8192);

        let api_response = OpenAIResponse {
            choices: vec![OpenAIChoice {
                message: OpenAIMessage {
                    content: Some(r#"{"options":["vegan"]}"#.to_string()),
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: OpenAIUsage {
                prompt_tokens: 12,
                completion_tokens: 7,
            },
        };

        let parsed = client.parse_response(api_response);
        assert_eq!(parsed.content, Some(r#"{"options":["vegan"]}"#.to_string()));
        assert_eq!(parsed.stop_reason, StopReason::EndTurn);
        assert_eq!(parsed.usage.input_tokens, 12);
        assert_eq!(parsed.usage.output_tokens, 7);
    }

    #[test]
    fn test_parse_response_no_choices() {
        let client = test_client(8192);

        let api_response = OpenAIResponse {
            choices: vec![],
            usage: OpenAIUsage {
                prompt_tokens: 0,
                completion_tokens: 0,
            },
        };

        let parsed = client.parse_response(api_response);
        assert_eq!(parsed.content, None);
    }
}
