//! Validated story generation request

use crate::core::{error::DomainError, model::StoryModel};

/// Prompt used when a request omits one
pub const DEFAULT_PROMPT: &str = "Generate an interesting story.";

/// A story request whose model passed the allow-list (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    raw_prompt: String,
    model: StoryModel,
}

impl GenerationRequest {
    pub fn new(raw_prompt: impl Into<String>, model: StoryModel) -> Self {
        Self {
            raw_prompt: raw_prompt.into(),
            model,
        }
    }

    /// Validate a model identifier and build the request
    pub fn parse(raw_prompt: impl Into<String>, model: &str) -> Result<Self, DomainError> {
        Ok(Self::new(raw_prompt, model.parse()?))
    }

    /// The prompt exactly as the user sent it
    pub fn raw_prompt(&self) -> &str {
        &self.raw_prompt
    }

    pub fn model(&self) -> StoryModel {
        self.model
    }
}
