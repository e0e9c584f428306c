//! Story request and result values.

pub mod guidance;
pub mod outcome;
pub mod request;

pub use guidance::{PromptGuidance, REMEDIATION_SUGGESTIONS};
pub use outcome::{
    EXHAUSTED_MESSAGE, FailureClassification, FailureReason, GenerationFailure, GenerationOutcome,
    GeneratedStory,
};
pub use request::{DEFAULT_PROMPT, GenerationRequest};
