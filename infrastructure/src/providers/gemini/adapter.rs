//! Gemini provider adapter
//!
//! Implements [`PrimaryProvider`] over the REST `generateContent` endpoint.

use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::config::FileGeminiConfig;
use crate::providers::{api_error, http_client, normalize_key, transport_error};
use artisan_application::{PrimaryProvider, ProviderError};
use artisan_domain::{GenerationConfig, ProviderResponse, SafetySetting, StoryModel};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

const PROVIDER: &str = "gemini";

pub struct GeminiAdapter {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiAdapter {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: http_client(timeout)?,
            api_key: normalize_key(api_key),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &FileGeminiConfig) -> Result<Self, reqwest::Error> {
        Self::new(
            config.resolve_api_key(),
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn endpoint(&self, model: StoryModel) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            model.as_str()
        )
    }
}

#[async_trait]
impl PrimaryProvider for GeminiAdapter {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(
        &self,
        model: StoryModel,
        prompt: &str,
        config: &GenerationConfig,
        safety: &[SafetySetting],
    ) -> Result<ProviderResponse, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::not_configured("Google"))?;

        let body = GenerateContentRequest::new(prompt, config, safety);
        debug!(model = %model, prompt_len = prompt.len(), "Sending request to Gemini");

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::model_unavailable(format!(
                "Model {} not found",
                model
            )));
        }
        if !status.is_success() {
            return Err(api_error(PROVIDER, response).await);
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;
        parsed.into_provider_response()
    }
}
