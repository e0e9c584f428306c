//! Retry state machine for story generation
//!
//! The schedule owns no I/O. A driver feeds it [`StepEvent`]s after each
//! provider call or backoff and performs whatever the returned
//! [`GenerationState`] asks for:
//!
//! ```text
//! NotStarted ─Start─▶ Attempting(1, 0)
//! Attempting(a, m) ─Accepted─▶ Succeeded
//! Attempting(a, m) ─Rejected─▶ Attempting(a, m+1)        more models left
//!                             ─▶ Backoff(a+1, base·2^(a-1))  attempts left
//!                             ─▶ Fallback(0)               last attempt
//! Backoff(a, _) ─BackoffElapsed─▶ Attempting(a, 0)
//! Fallback(i) ─Accepted─▶ Succeeded
//! Fallback(i) ─Rejected─▶ Fallback(i+1) | Exhausted
//! ```

use std::time::Duration;

/// Where a generation request currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    NotStarted,
    /// Calling candidate model `model_index` on 1-based `attempt`
    Attempting { attempt: u32, model_index: usize },
    /// Waiting before `next_attempt`
    Backoff { next_attempt: u32, delay: Duration },
    /// Calling secondary provider `index` (priority order)
    Fallback { index: usize },
    Succeeded,
    Exhausted,
}

impl GenerationState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationState::Succeeded | GenerationState::Exhausted)
    }
}

/// Input to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    Start,
    /// The current call produced an acceptable story
    Accepted,
    /// The current call failed or produced nothing usable
    Rejected,
    BackoffElapsed,
}

/// Shape of one request's retry plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrySchedule {
    pub max_attempts: u32,
    pub backoff_base: Duration,
    pub model_count: usize,
    pub fallback_count: usize,
}

impl Default for RetrySchedule {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: Duration::from_secs(1),
            model_count: 3,
            fallback_count: 2,
        }
    }
}

impl RetrySchedule {
    pub fn new(max_attempts: u32, backoff_base: Duration) -> Self {
        Self {
            max_attempts,
            backoff_base,
            ..Default::default()
        }
    }

    pub fn with_model_count(mut self, model_count: usize) -> Self {
        self.model_count = model_count;
        self
    }

    pub fn with_fallback_count(mut self, fallback_count: usize) -> Self {
        self.fallback_count = fallback_count;
        self
    }

    /// Delay after a failed 1-based `attempt`: `base * 2^(attempt-1)`
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.backoff_base.saturating_mul(factor)
    }

    /// Advance the machine. Events that do not apply to `state` leave it unchanged.
    pub fn transition(&self, state: GenerationState, event: StepEvent) -> GenerationState {
        use GenerationState::*;

        match (state, event) {
            (NotStarted, StepEvent::Start) => self.enter_attempt(1),
            (Attempting { .. } | Fallback { .. }, StepEvent::Accepted) => Succeeded,
            (
                Attempting {
                    attempt,
                    model_index,
                },
                StepEvent::Rejected,
            ) => {
                if model_index + 1 < self.model_count {
                    Attempting {
                        attempt,
                        model_index: model_index + 1,
                    }
                } else {
                    self.after_attempt(attempt)
                }
            }
            (Backoff { next_attempt, .. }, StepEvent::BackoffElapsed) => {
                self.enter_attempt(next_attempt)
            }
            (Fallback { index }, StepEvent::Rejected) => self.enter_fallback(index + 1),
            (state, _) => state,
        }
    }

    fn enter_attempt(&self, attempt: u32) -> GenerationState {
        if attempt > self.max_attempts {
            return self.enter_fallback(0);
        }
        if self.model_count == 0 {
            return self.after_attempt(attempt);
        }
        GenerationState::Attempting {
            attempt,
            model_index: 0,
        }
    }

    fn after_attempt(&self, attempt: u32) -> GenerationState {
        if attempt >= self.max_attempts {
            self.enter_fallback(0)
        } else {
            GenerationState::Backoff {
                next_attempt: attempt + 1,
                delay: self.backoff_delay(attempt),
            }
        }
    }

    fn enter_fallback(&self, index: usize) -> GenerationState {
        if index < self.fallback_count {
            GenerationState::Fallback { index }
        } else {
            GenerationState::Exhausted
        }
    }
}
