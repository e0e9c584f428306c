//! Domain layer for artisan-story
//!
//! This crate contains the story generation rules and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Prompt preparation
//!
//! A user prompt is [sanitized](prompt::sanitize) once, then wrapped in four
//! narrative framings ([`PromptVariants`]). Later retry attempts use later
//! framings.
//!
//! ## Retry plan
//!
//! [`RetrySchedule`] is a pure state machine: candidate models within an
//! attempt, exponential backoff between attempts, then secondary providers
//! in priority order.
//!
//! ## Outcomes
//!
//! Every provider call leaves a [`ProviderAttempt`] in the trail. A request
//! ends in a [`GeneratedStory`] or a [`GenerationFailure`] that classifies
//! itself for the caller.

pub mod collection;
pub mod core;
pub mod generation;
pub mod prompt;
pub mod story;
pub mod util;

// Re-export commonly used types
pub use collection::{CollectionName, Document};
pub use core::{error::DomainError, model::StoryModel};
pub use generation::{
    AttemptOutcome, BlockThreshold, Candidate, GenerationConfig, GenerationState, HarmCategory,
    ProviderAttempt, ProviderErrorKind, ProviderResponse, RetrySchedule, SafetySetting, StepEvent,
    is_acceptable_story,
};
pub use prompt::{PromptVariants, StoryPromptTemplate, sanitize};
pub use story::{
    DEFAULT_PROMPT, EXHAUSTED_MESSAGE, FailureClassification, FailureReason, GeneratedStory,
    GenerationFailure, GenerationOutcome, GenerationRequest, PromptGuidance,
    REMEDIATION_SUGGESTIONS,
};
