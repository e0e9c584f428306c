//! Prompt preparation for story generation.
//!
//! - [`sanitizer`]: ordered neutral-term substitution
//! - [`template`]: narrative framings wrapped around the sanitized prompt

pub mod sanitizer;
pub mod template;

pub use sanitizer::{NEUTRAL_TERMS, sanitize};
pub use template::{PromptVariants, StoryPromptTemplate, VARIANT_COUNT};
