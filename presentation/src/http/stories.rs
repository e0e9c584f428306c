//! `POST /stories/generate`

use super::router::AppState;
use crate::output::StoryReply;
use artisan_domain::{DEFAULT_PROMPT, GenerationRequest, StoryModel};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

/// Request body; both fields are optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GenerateBody {
    pub prompt: Option<String>,
    pub model: Option<String>,
}

impl GenerateBody {
    /// An empty body means "all defaults"
    fn parse(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }
}

pub(crate) async fn generate(State(state): State<AppState>, body: Bytes) -> Response {
    let body = match GenerateBody::parse(&body) {
        Ok(body) => body,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": format!("Invalid request body: {}", e)})),
            )
                .into_response();
        }
    };

    let prompt = body.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string());
    let model = body
        .model
        .unwrap_or_else(|| StoryModel::default().as_str().to_string());

    info!(model = %model, prompt_len = prompt.len(), "Story generation requested");

    let result = match GenerationRequest::parse(prompt.as_str(), &model) {
        Ok(request) => {
            state
                .stories
                .execute_with_progress(request, state.progress.as_ref())
                .await
        }
        Err(e) => Err(e.into()),
    };

    let reply = StoryReply::from_result(&prompt, result);
    info!(status = reply.status.as_u16(), "Story generation finished");
    reply.into_response()
}
