//! Food guide flow orchestration
//!
//! Three entry points - options, questions, final output - each of which
//! renders a prompt template, calls the model with the flow's response
//! schema, and decodes the structured result. No state survives a call;
//! concurrent invocations share nothing but the injected client.

mod error;
mod types;

pub use error::GuideError;
pub use types::{FinalOutput, GuideOptions, GuideQuestions, Question};

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::llm::{CompletionRequest, CompletionResponse, LlmClient, Message, ResponseSchema, StopReason, create_client};
use crate::prompts::{GuideTemplate, PromptLoader};

/// Base system instruction for every flow
const SYSTEM_MESSAGE: &str = "You are a helpful food guide assistant.";

/// Prefix inserted before a caller-supplied condition
const CONDITION_PREFIX: &str = "\nHere are some of the conditions that you must keep while generating a response:\n";

/// Orchestrates the three guide flows against an injected model client
pub struct FoodGuide {
    llm: Arc<dyn LlmClient>,
    prompts: PromptLoader,
    max_tokens: u32,
}

impl FoodGuide {
    /// Create a guide from an injected client and template loader
    pub fn new(llm: Arc<dyn LlmClient>, prompts: PromptLoader, max_tokens: u32) -> Self {
        Self { llm, prompts, max_tokens }
    }

    /// Create a guide from configuration
    ///
    /// Builds the OpenAI client and a loader over the configured template
    /// directory. Fails when the API key environment variable is unset.
    pub fn from_config(config: &Config) -> Result<Self, GuideError> {
        let llm = create_client(&config.llm)?;
        let prompts = PromptLoader::new(&config.prompts.dir);
        Ok(Self::new(llm, prompts, config.llm.max_tokens))
    }

    /// Generate option choices from free-form user input
    pub async fn options(&self, user_input: &str, condition: Option<&str>) -> Result<GuideOptions, GuideError> {
        debug!(user_input_len = user_input.len(), "options: called");
        let prompt = self
            .prompts
            .render(GuideTemplate::Options, &serde_json::json!({ "user_input": user_input }))?;

        let response = self.complete(prompt, condition, GuideOptions::response_schema()).await?;
        let options: GuideOptions = decode(response, "FoodGuideOptions")?;

        info!(option_count = options.options.len(), "options: complete");
        Ok(options)
    }

    /// Generate one follow-up question per selected option
    pub async fn questions(
        &self,
        selected_options: &[String],
        condition: Option<&str>,
    ) -> Result<GuideQuestions, GuideError> {
        debug!(option_count = selected_options.len(), "questions: called");
        let selected = selected_options.join(", ");
        let prompt = self
            .prompts
            .render(GuideTemplate::Questions, &serde_json::json!({ "selected_options": selected }))?;

        let response = self.complete(prompt, condition, GuideQuestions::response_schema()).await?;
        let questions: GuideQuestions = decode(response, "FoodGuideQuestions")?;

        info!(question_count = questions.questions.len(), "questions: complete");
        Ok(questions)
    }

    /// Generate the final recommendation from the user's answers
    ///
    /// Runs the questions flow first to obtain the question list, then pairs
    /// each question with the answer at the same position. The counts must
    /// match exactly.
    pub async fn final_output(
        &self,
        selected_options: &[String],
        user_answers: &[String],
        condition: Option<&str>,
    ) -> Result<FinalOutput, GuideError> {
        debug!(
            option_count = selected_options.len(),
            answer_count = user_answers.len(),
            "final_output: called"
        );
        let questions = self.questions(selected_options, condition).await?;

        let transcript = build_transcript(&questions, user_answers)?;
        let prompt = self
            .prompts
            .render(GuideTemplate::FinalOutput, &serde_json::json!({ "user_answers": transcript }))?;

        let response = self.complete(prompt, condition, FinalOutput::response_schema()).await?;
        let output = decode(response, "FoodGuideFinalOutput")?;

        info!("final_output: complete");
        Ok(output)
    }

    /// Assemble the system message and send one completion request
    async fn complete(
        &self,
        prompt: String,
        condition: Option<&str>,
        schema: ResponseSchema,
    ) -> Result<CompletionResponse, GuideError> {
        let request = CompletionRequest {
            system_prompt: system_message(condition),
            messages: vec![Message::user(prompt)],
            max_tokens: self.max_tokens,
            response_schema: Some(schema),
        };

        Ok(self.llm.complete(request).await?)
    }
}

/// Build the system message, appending the optional condition after the
/// fixed prefix
fn system_message(condition: Option<&str>) -> String {
    match condition {
        Some(condition) => format!("{SYSTEM_MESSAGE}{CONDITION_PREFIX}{condition}"),
        None => SYSTEM_MESSAGE.to_string(),
    }
}

/// Pair each question with the answer at the same position
///
/// Lines look like `What is your goal?: "weight loss"`. The counts must
/// match; a shorter or longer answer list is rejected outright rather than
/// producing a transcript with holes.
fn build_transcript(questions: &GuideQuestions, answers: &[String]) -> Result<String, GuideError> {
    if questions.questions.len() != answers.len() {
        return Err(GuideError::AnswerCountMismatch {
            questions: questions.questions.len(),
            answers: answers.len(),
        });
    }

    Ok(questions
        .questions
        .iter()
        .zip(answers)
        .map(|(q, a)| format!("{}: \"{}\"", q.question, a))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Decode a model response into the flow's result type
///
/// No content and undecodable content are distinct failures; neither
/// produces a partial result.
fn decode<T: DeserializeOwned>(response: CompletionResponse, what: &'static str) -> Result<T, GuideError> {
    if response.stop_reason == StopReason::MaxTokens {
        warn!(%what, "decode: response was truncated at max tokens");
    }

    let content = match response.content {
        Some(c) if !c.trim().is_empty() => c,
        _ => return Err(GuideError::EmptyResponse),
    };

    serde_json::from_str(strip_code_fence(&content)).map_err(|source| GuideError::Parse { what, source })
}

/// Strip a markdown code fence wrapper from a JSON payload
///
/// Some OpenAI-compatible backends fence their JSON even in schema mode.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();

    if let Some(stripped) = trimmed.strip_prefix("```json").and_then(|s| s.strip_suffix("```")) {
        return stripped.trim();
    }

    if let Some(stripped) = trimmed.strip_prefix("```").and_then(|s| s.strip_suffix("```")) {
        return stripped.trim();
    }

    content
}
