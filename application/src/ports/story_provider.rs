//! Story provider ports
//!
//! Defines the interfaces for the primary generative provider and the
//! secondary providers tried once the primary is exhausted.

use artisan_domain::{
    GenerationConfig, ProviderErrorKind, ProviderResponse, SafetySetting, StoryModel,
};
use async_trait::async_trait;
use thiserror::Error;

/// A failed provider call, already sorted into a [`ProviderErrorKind`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Build from a free-form provider message using the wording heuristic.
    ///
    /// See [`ProviderErrorKind::from_message`] for why this is fragile.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(ProviderErrorKind::from_message(&message), message)
    }

    pub fn safety_blocked(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::SafetyBlocked, message)
    }

    pub fn model_unavailable(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::ModelUnavailable, message)
    }

    pub fn transient(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Transient, message)
    }

    pub fn not_configured(provider: &str) -> Self {
        Self::new(
            ProviderErrorKind::NotConfigured,
            format!("{} API key not configured", provider),
        )
    }
}

/// The primary generative provider
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait PrimaryProvider: Send + Sync {
    /// Provider name used in logs and the attempt trail
    fn name(&self) -> &str;

    /// Whether an API key is available
    fn is_configured(&self) -> bool;

    /// Generate text for `prompt` with `model`
    async fn generate(
        &self,
        model: StoryModel,
        prompt: &str,
        config: &GenerationConfig,
        safety: &[SafetySetting],
    ) -> Result<ProviderResponse, ProviderError>;
}

/// A secondary provider, tried once with the sanitized prompt
#[async_trait]
pub trait SecondaryProvider: Send + Sync {
    /// Provider name used in logs and the attempt trail
    fn name(&self) -> &str;

    /// Model identifier reported as `model_used` on success
    fn model(&self) -> &str;

    /// Whether an API key is available; unconfigured providers are skipped
    fn is_configured(&self) -> bool;

    /// Generate text for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
