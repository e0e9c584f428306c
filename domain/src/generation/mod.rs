//! Story generation: provider request settings, response shapes,
//! error kinds, the attempt trail, and the retry state machine.

pub mod attempt;
pub mod config;
pub mod error_kind;
pub mod response;
pub mod schedule;

pub use attempt::{AttemptOutcome, ProviderAttempt, any_safety_blocked};
pub use config::{BlockThreshold, GenerationConfig, HarmCategory, SafetySetting};
pub use error_kind::{ProviderErrorKind, is_safety_text};
pub use response::{Candidate, MIN_STORY_CHARS, ProviderResponse, is_acceptable_story};
pub use schedule::{GenerationState, RetrySchedule, StepEvent};
