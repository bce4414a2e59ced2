//! Guide flow domain types and response schemas
//!
//! Plain value shapes assembled once per flow invocation and handed back to
//! the caller. Nothing here persists or mutates after construction.

use serde::{Deserialize, Serialize};

use crate::llm::ResponseSchema;

/// User-selectable option labels produced by the options flow
///
/// Order carries no significance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideOptions {
    pub options: Vec<String>,
}

impl GuideOptions {
    /// Schema requested from the model for the options flow
    pub fn response_schema() -> ResponseSchema {
        ResponseSchema::new(
            "food_guide_options",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "options": {
                        "type": "array",
                        "items": { "type": "string" }
                    }
                },
                "required": ["options"],
                "additionalProperties": false
            }),
        )
    }
}

/// A single follow-up question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
}

/// Follow-up questions, one per selected option
///
/// Order matters: answers are paired with questions by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideQuestions {
    pub questions: Vec<Question>,
}

impl GuideQuestions {
    /// Schema requested from the model for the questions flow
    pub fn response_schema() -> ResponseSchema {
        ResponseSchema::new(
            "food_guide_questions",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "questions": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "question": { "type": "string" }
                            },
                            "required": ["question"],
                            "additionalProperties": false
                        }
                    }
                },
                "required": ["questions"],
                "additionalProperties": false
            }),
        )
    }
}

/// Final recommendation, passed through without interpretation
///
/// The request schema constrains what the model produces, but this crate
/// never looks inside the decoded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinalOutput(pub serde_json::Value);

impl FinalOutput {
    /// Schema requested from the model for the final-output flow
    pub fn response_schema() -> ResponseSchema {
        ResponseSchema::new(
            "food_guide_final_output",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "summary": { "type": "string" },
                    "recommendations": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "title": { "type": "string" },
                                "description": { "type": "string" }
                            },
                            "required": ["title", "description"],
                            "additionalProperties": false
                        }
                    }
                },
                "required": ["summary", "recommendations"],
                "additionalProperties": false
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names_match_flows() {
        assert_eq!(GuideOptions::response_schema().name, "food_guide_options");
        assert_eq!(GuideQuestions::response_schema().name, "food_guide_questions");
        assert_eq!(FinalOutput::response_schema().name, "food_guide_final_output");
    }

    #[test]
    fn test_options_decode() {
        let decoded: GuideOptions = serde_json::from_str(r#"{"options":["vegan","low-sugar"]}"#).unwrap();
        assert_eq!(decoded.options, vec!["vegan", "low-sugar"]);
    }

    #[test]
    fn test_questions_decode_preserves_order() {
        let decoded: GuideQuestions =
            serde_json::from_str(r#"{"questions":[{"question":"A?"},{"question":"B?"}]}"#).unwrap();
        assert_eq!(decoded.questions[0].question, "A?");
        assert_eq!(decoded.questions[1].question, "B?");
    }

    #[test]
    fn test_final_output_is_opaque() {
        let decoded: FinalOutput = serde_json::from_str(r#"{"summary":"s","recommendations":[]}"#).unwrap();
        assert_eq!(decoded.0["summary"], "s");
    }

    #[test]
    fn test_questions_schema_requires_question_field() {
        let schema = GuideQuestions::response_schema().schema;
        assert_eq!(schema["properties"]["questions"]["items"]["required"][0], "question");
    }
}
