//! Terminal results of a story generation request

use crate::generation::{AttemptOutcome, ProviderAttempt, any_safety_blocked, is_safety_text};
use serde::{Deserialize, Serialize};

/// Message carried by a failure after every provider was tried
pub const EXHAUSTED_MESSAGE: &str =
    "All AI providers failed due to safety filters or technical issues";

/// A generated story and where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedStory {
    pub text: String,
    /// Model identifier that actually produced the text
    pub model_used: String,
    pub attempts: Vec<ProviderAttempt>,
}

/// Why generation stopped without a story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The primary provider has no API key; nothing was attempted
    Configuration,
    /// Every model, attempt, and secondary provider failed
    Exhausted,
}

/// User-facing failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureClassification {
    SafetyBlocked,
    GenerationError,
}

/// A failed generation with its attempt trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationFailure {
    pub reason: FailureReason,
    pub message: String,
    pub attempts: Vec<ProviderAttempt>,
}

impl GenerationFailure {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self {
            reason: FailureReason::Configuration,
            message: message.into(),
            attempts: vec![],
        }
    }

    pub fn exhausted(attempts: Vec<ProviderAttempt>) -> Self {
        Self {
            reason: FailureReason::Exhausted,
            message: EXHAUSTED_MESSAGE.to_string(),
            attempts,
        }
    }

    /// Classify from the trail, not from [`EXHAUSTED_MESSAGE`] (which
    /// always mentions safety filters).
    ///
    /// An exhausted chain is `SafetyBlocked` when some attempt was refused
    /// by content filtering, either structurally or through an error message
    /// that names a filter. Everything else is a `GenerationError`.
    pub fn classify(&self) -> FailureClassification {
        match self.reason {
            FailureReason::Configuration => FailureClassification::GenerationError,
            FailureReason::Exhausted => {
                let filtered_message = self.attempts.iter().any(|a| {
                    matches!(&a.outcome, AttemptOutcome::OtherError { message } if is_safety_text(message))
                });
                if any_safety_blocked(&self.attempts) || filtered_message {
                    FailureClassification::SafetyBlocked
                } else {
                    FailureClassification::GenerationError
                }
            }
        }
    }
}

/// Result of one story generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Success(GeneratedStory),
    Failure(GenerationFailure),
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success(_))
    }

    /// The attempt trail, whichever way the request ended
    pub fn attempts(&self) -> &[ProviderAttempt] {
        match self {
            GenerationOutcome::Success(story) => &story.attempts,
            GenerationOutcome::Failure(failure) => &failure.attempts,
        }
    }
}
