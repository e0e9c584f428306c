//! Generation parameters for the retry loop.
//!
//! [`GenerationParams`] groups the static parameters of the retry loop in
//! [`GenerateStoryUseCase`](crate::use_cases::generate_story::GenerateStoryUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry loop control parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Passes over the candidate models before falling back.
    pub max_attempts: u32,
    /// First backoff delay; doubles after each failed attempt.
    pub backoff_base: Duration,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: Duration::from_secs(1),
        }
    }
}

impl GenerationParams {
    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }
}
