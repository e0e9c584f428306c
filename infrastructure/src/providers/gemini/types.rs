//! Wire types for `models/{model}:generateContent`
//!
//! Converts between domain generation settings and the JSON the API
//! speaks, and from the API reply to a domain [`ProviderResponse`].

use artisan_application::ProviderError;
use artisan_domain::{Candidate, GenerationConfig, ProviderResponse, SafetySetting};
use serde::{Deserialize, Serialize};

/// Finish reasons that mean the candidate was withheld by a filter
const SAFETY_FINISH_REASONS: [&str; 3] = ["SAFETY", "BLOCKLIST", "PROHIBITED_CONTENT"];

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content>,
    pub generation_config: &'a GenerationConfig,
    pub safety_settings: &'a [SafetySetting],
}

impl<'a> GenerateContentRequest<'a> {
    pub fn new(prompt: &str, config: &'a GenerationConfig, safety: &'a [SafetySetting]) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: config,
            safety_settings: safety,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<ResponseCandidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCandidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl ResponseCandidate {
    /// One entry per part, empty for parts that carry no text
    fn texts(&self) -> Vec<String> {
        self.content
            .iter()
            .flat_map(|c| c.parts.iter())
            .map(|p| p.text.clone().unwrap_or_default())
            .collect()
    }

    fn joined_text(&self) -> Option<String> {
        let text = self.texts().concat();
        (!text.trim().is_empty()).then_some(text)
    }

    fn is_safety_stop(&self) -> bool {
        self.finish_reason
            .as_deref()
            .is_some_and(|r| SAFETY_FINISH_REASONS.contains(&r))
    }
}

impl GenerateContentResponse {
    /// Convert to a domain response.
    ///
    /// - `promptFeedback.blockReason` set: the prompt itself was blocked.
    /// - A sole candidate with text: [`ProviderResponse::Direct`].
    /// - A sole candidate without text stopped by a filter: safety blocked.
    /// - Anything else is passed through as raw candidates.
    pub fn into_provider_response(self) -> Result<ProviderResponse, ProviderError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ProviderError::safety_blocked(format!(
                "Prompt blocked by Gemini: {}",
                reason
            )));
        }

        if let [sole] = self.candidates.as_slice() {
            if let Some(text) = sole.joined_text() {
                return Ok(ProviderResponse::direct(text));
            }
            if sole.is_safety_stop() {
                return Err(ProviderError::safety_blocked(format!(
                    "Candidate blocked by Gemini safety filter: {}",
                    sole.finish_reason.as_deref().unwrap_or_default()
                )));
            }
        }

        Ok(ProviderResponse::Candidates(
            self.candidates
                .into_iter()
                .map(|c| {
                    let candidate = Candidate::new(c.texts());
                    match c.finish_reason {
                        Some(reason) => candidate.with_finish_reason(reason),
                        None => candidate,
                    }
                })
                .collect(),
        ))
    }
}
