//! Hugging Face Inference API secondary provider

use crate::config::FileHuggingFaceConfig;
use crate::providers::{http_client, normalize_key, transport_error};
use artisan_application::{ProviderError, SecondaryProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

const PROVIDER: &str = "huggingface";

pub struct HuggingFaceAdapter {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl HuggingFaceAdapter {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: http_client(timeout)?,
            api_key: normalize_key(api_key),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    pub fn from_config(config: &FileHuggingFaceConfig) -> Result<Self, reqwest::Error> {
        Self::new(
            config.resolve_api_key(),
            config.base_url.clone(),
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }
}

/// `[{"generated_text": "..."}]` → the first element's text
fn first_generated_text(body: &Value) -> Option<String> {
    body.as_array()?
        .first()?
        .get("generated_text")?
        .as_str()
        .map(str::to_string)
}

#[async_trait]
impl SecondaryProvider for HuggingFaceAdapter {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::not_configured("Hugging Face"))?;

        debug!(model = %self.model, "Sending request to Hugging Face");

        let response = self
            .client
            .post(format!("{}/models/{}", self.base_url, self.model))
            .bearer_auth(api_key)
            .json(&json!({ "inputs": prompt }))
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        // Only a plain 200 carries a usable payload.
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_message(format!(
                "Hugging Face API error {}: {}",
                status, body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        first_generated_text(&body).ok_or_else(|| {
            ProviderError::transient("Hugging Face response missing generated_text")
        })
    }
}
