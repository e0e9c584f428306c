//! `tracing` sink for generation progress events.

use artisan_application::GenerationProgress;
use artisan_domain::{AttemptOutcome, ProviderAttempt};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Emits one structured event per attempt, backoff, and fallback.
///
/// Successful attempts log at `info`, rejected ones at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingGenerationProgress;

impl TracingGenerationProgress {
    pub fn new() -> Self {
        Self
    }
}

/// Short label for an attempt outcome
pub(crate) fn outcome_label(outcome: &AttemptOutcome) -> &'static str {
    match outcome {
        AttemptOutcome::Success { .. } => "success",
        AttemptOutcome::SafetyBlocked => "safety_blocked",
        AttemptOutcome::ModelUnavailable => "model_unavailable",
        AttemptOutcome::Insufficient { .. } => "insufficient",
        AttemptOutcome::NotConfigured => "not_configured",
        AttemptOutcome::OtherError { .. } => "error",
    }
}

impl GenerationProgress for TracingGenerationProgress {
    fn on_attempt_start(&self, provider: &str, model: &str, attempt: u32) {
        debug!(provider, model, attempt, "Attempt started");
    }

    fn on_attempt_complete(&self, attempt: &ProviderAttempt) {
        let outcome = outcome_label(&attempt.outcome);
        match &attempt.outcome {
            AttemptOutcome::Success { text } => info!(
                provider = %attempt.provider,
                model = %attempt.model,
                variant = ?attempt.prompt_variant,
                chars = text.chars().count(),
                outcome,
                "Attempt succeeded"
            ),
            AttemptOutcome::OtherError { message } => warn!(
                provider = %attempt.provider,
                model = %attempt.model,
                variant = ?attempt.prompt_variant,
                outcome,
                error = %message,
                "Attempt failed"
            ),
            _ => warn!(
                provider = %attempt.provider,
                model = %attempt.model,
                variant = ?attempt.prompt_variant,
                outcome,
                "Attempt rejected"
            ),
        }
    }

    fn on_backoff(&self, next_attempt: u32, delay: Duration) {
        info!(next_attempt, delay_ms = delay.as_millis() as u64, "Backing off");
    }

    fn on_fallback(&self, provider: &str) {
        info!(provider, "Falling back to secondary provider");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        assert_eq!(
            outcome_label(&AttemptOutcome::Success {
                text: "x".to_string()
            }),
            "success"
        );
        assert_eq!(outcome_label(&AttemptOutcome::SafetyBlocked), "safety_blocked");
        assert_eq!(
            outcome_label(&AttemptOutcome::Insufficient { length: 3 }),
            "insufficient"
        );
    }

    #[test]
    fn test_callbacks_without_subscriber() {
        let progress = TracingGenerationProgress::new();
        progress.on_attempt_start("gemini", "gemini-1.5-flash", 1);
        progress.on_attempt_complete(&ProviderAttempt::new(
            "gemini",
            "gemini-1.5-flash",
            Some(0),
            AttemptOutcome::ModelUnavailable,
        ));
        progress.on_backoff(2, Duration::from_secs(1));
        progress.on_fallback("openai");
    }
}
