//! Progress notification port
//!
//! Defines the interface for observing a story generation request as it
//! moves through models, attempts, and fallbacks.

use artisan_domain::ProviderAttempt;
use std::time::Duration;

/// Callback for progress updates during story generation
///
/// All methods default to no-ops so implementations pick what they need.
pub trait GenerationProgress: Send + Sync {
    /// Called before each primary-provider call
    fn on_attempt_start(&self, _provider: &str, _model: &str, _attempt: u32) {}

    /// Called after every provider call, primary or secondary
    fn on_attempt_complete(&self, _attempt: &ProviderAttempt) {}

    /// Called before waiting `delay` ahead of `next_attempt`
    fn on_backoff(&self, _next_attempt: u32, _delay: Duration) {}

    /// Called before a secondary provider is tried
    fn on_fallback(&self, _provider: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoGenerationProgress;

impl GenerationProgress for NoGenerationProgress {}
