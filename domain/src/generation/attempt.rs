//! Attempt trail entries

use super::error_kind::ProviderErrorKind;
use serde::{Deserialize, Serialize};

/// What happened on one provider call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AttemptOutcome {
    Success { text: String },
    SafetyBlocked,
    ModelUnavailable,
    /// The call returned, but with no text or text below the quality gate
    Insufficient { length: usize },
    /// Skipped because the provider has no API key
    NotConfigured,
    OtherError { message: String },
}

impl AttemptOutcome {
    /// Map a structured provider failure onto an outcome
    pub fn from_error(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        match kind {
            ProviderErrorKind::SafetyBlocked => AttemptOutcome::SafetyBlocked,
            ProviderErrorKind::ModelUnavailable => AttemptOutcome::ModelUnavailable,
            ProviderErrorKind::NotConfigured => AttemptOutcome::NotConfigured,
            ProviderErrorKind::Transient => AttemptOutcome::OtherError {
                message: message.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AttemptOutcome::Success { .. })
    }
}

/// One entry of a request's attempt trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderAttempt {
    /// Provider name (e.g. "gemini", "openai")
    pub provider: String,
    /// Model identifier sent to the provider
    pub model: String,
    /// Index into the prompt variants; `None` when the sanitized prompt was sent as-is
    pub prompt_variant: Option<usize>,
    pub outcome: AttemptOutcome,
}

impl ProviderAttempt {
    pub fn new(
        provider: impl Into<String>,
        model: impl Into<String>,
        prompt_variant: Option<usize>,
        outcome: AttemptOutcome,
    ) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            prompt_variant,
            outcome,
        }
    }
}

/// Whether any attempt in a trail was refused by content filtering
pub fn any_safety_blocked(trail: &[ProviderAttempt]) -> bool {
    trail
        .iter()
        .any(|a| matches!(a.outcome, AttemptOutcome::SafetyBlocked))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_error_kind() {
        assert_eq!(
            AttemptOutcome::from_error(ProviderErrorKind::SafetyBlocked, "x"),
            AttemptOutcome::SafetyBlocked
        );
        assert_eq!(
            AttemptOutcome::from_error(ProviderErrorKind::Transient, "timeout"),
            AttemptOutcome::OtherError {
                message: "timeout".to_string()
            }
        );
    }

    #[test]
    fn test_any_safety_blocked() {
        let trail = vec![
            ProviderAttempt::new("gemini", "gemini-1.5-flash", Some(0), AttemptOutcome::ModelUnavailable),
            ProviderAttempt::new("gemini", "gemini-1.5-pro", Some(0), AttemptOutcome::SafetyBlocked),
        ];
        assert!(any_safety_blocked(&trail));
        assert!(!any_safety_blocked(&trail[..1]));
    }

    #[test]
    fn test_outcome_serializes_tagged() {
        let json = serde_json::to_value(AttemptOutcome::Insufficient { length: 12 }).unwrap();
        assert_eq!(json["outcome"], "insufficient");
        assert_eq!(json["length"], 12);
    }
}
