//! HTTP adapters for the story providers
//!
//! Each adapter owns one `reqwest::Client` and turns raw provider replies
//! into the structured [`ProviderError`](artisan_application::ProviderError)
//! kinds the use case acts on.

pub mod gemini;
pub mod huggingface;
pub mod openai;

pub use gemini::GeminiAdapter;
pub use huggingface::HuggingFaceAdapter;
pub use openai::OpenAiAdapter;

use artisan_application::ProviderError;
use reqwest::{Client, Response};
use std::time::Duration;

/// Build the shared client for one adapter.
pub(crate) fn http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

/// Transport-level failure (connect, timeout, body read)
pub(crate) fn transport_error(provider: &str, err: reqwest::Error) -> ProviderError {
    ProviderError::transient(format!("{} request failed: {}", provider, err))
}

/// Read an error body and classify it with the wording heuristic
pub(crate) async fn api_error(provider: &str, response: Response) -> ProviderError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ProviderError::from_message(format!("{} API error {}: {}", provider, status, body))
}

/// Trim an optional key, treating blanks as missing
pub(crate) fn normalize_key(api_key: Option<String>) -> Option<String> {
    api_key
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}
