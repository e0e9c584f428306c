//! Maps a generation result onto the public reply contract
//!
//! | Result | Status |
//! |---|---|
//! | story produced | 200 |
//! | unknown model or other invalid request | 400 |
//! | exhausted with a safety block in the trail | 400 |
//! | anything else | 500 |

use artisan_application::GenerateStoryError;
use artisan_domain::{
    FailureClassification, GenerationFailure, GenerationOutcome, PromptGuidance,
    REMEDIATION_SUGGESTIONS, StoryModel,
};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::{Value, json};

/// Stories shorter than this get authoring guidance attached
pub const THIN_STORY_CHARS: usize = 100;

const SAFETY_ERROR: &str = "Content generation was blocked by safety filters.";
const SAFETY_MESSAGE: &str = "Please try rephrasing your prompt to be more general and neutral.";

/// A status code plus JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct StoryReply {
    pub status: StatusCode,
    pub body: Value,
}

impl StoryReply {
    /// Build the reply for `prompt`, exactly as the caller sent it.
    pub fn from_result(
        prompt: &str,
        result: Result<GenerationOutcome, GenerateStoryError>,
    ) -> Self {
        match result {
            Ok(GenerationOutcome::Success(story)) => {
                let mut body = json!({
                    "story": story.text,
                    "model_used": story.model_used,
                    "prompt": prompt,
                });
                if story.text.chars().count() < THIN_STORY_CHARS {
                    body["guidance"] = guidance();
                }
                Self::new(StatusCode::OK, body)
            }
            Ok(GenerationOutcome::Failure(failure)) => Self::failure(&failure),
            Err(GenerateStoryError::InvalidRequest(e)) if e.is_invalid_model() => {
                Self::invalid_model()
            }
            Err(GenerateStoryError::InvalidRequest(e)) => {
                Self::new(StatusCode::BAD_REQUEST, json!({ "error": e.to_string() }))
            }
            Err(err @ GenerateStoryError::Cancelled) => Self::generation_failed(&err.to_string()),
        }
    }

    pub fn invalid_model() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            json!({
                "error": format!("Invalid model. Available models: {:?}", StoryModel::identifiers())
            }),
        )
    }

    fn failure(failure: &GenerationFailure) -> Self {
        match failure.classify() {
            FailureClassification::SafetyBlocked => Self::new(
                StatusCode::BAD_REQUEST,
                json!({
                    "error": SAFETY_ERROR,
                    "message": SAFETY_MESSAGE,
                    "guidance": guidance(),
                    "alternative_providers_tried": true,
                }),
            ),
            FailureClassification::GenerationError => Self::generation_failed(&failure.message),
        }
    }

    fn generation_failed(reason: &str) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({
                "error": format!("Generation failed: {}", reason),
                "guidance": guidance(),
                "suggestions": REMEDIATION_SUGGESTIONS,
            }),
        )
    }

    fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }
}

fn guidance() -> Value {
    serde_json::to_value(PromptGuidance::standard()).unwrap_or(Value::Null)
}

impl IntoResponse for StoryReply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
