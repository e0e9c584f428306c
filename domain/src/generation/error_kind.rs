//! Structured provider failure kinds

use serde::{Deserialize, Serialize};

const SAFETY_MARKERS: [&str; 3] = ["safety", "blocked", "filter"];
const UNAVAILABLE_MARKER: &str = "not found";

/// Why a single provider call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderErrorKind {
    /// Refused by provider content filtering
    SafetyBlocked,
    /// The requested model does not exist or is not served
    ModelUnavailable,
    /// Any other failure (network, quota, malformed reply, ...)
    Transient,
    /// No API key for this provider
    NotConfigured,
}

impl ProviderErrorKind {
    /// Classify a raw provider error message.
    ///
    /// This keys on provider wording ("safety", "blocked", "filter",
    /// "not found", case-insensitive) and breaks silently if a provider
    /// rephrases its errors. Adapters call it only when the reply carries
    /// no structured signal (status code, block reason).
    pub fn from_message(message: &str) -> Self {
        let lower = message.to_lowercase();
        if is_safety_text(&lower) {
            ProviderErrorKind::SafetyBlocked
        } else if lower.contains(UNAVAILABLE_MARKER) {
            ProviderErrorKind::ModelUnavailable
        } else {
            ProviderErrorKind::Transient
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderErrorKind::SafetyBlocked => "safety_blocked",
            ProviderErrorKind::ModelUnavailable => "model_unavailable",
            ProviderErrorKind::Transient => "transient",
            ProviderErrorKind::NotConfigured => "not_configured",
        }
    }
}

impl std::fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether text mentions a content-filter refusal (case-insensitive)
pub fn is_safety_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    SAFETY_MARKERS.iter().any(|marker| lower.contains(marker))
}
