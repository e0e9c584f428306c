//! Application layer for artisan-story
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    document_store::{DocumentStore, StoreError, into_fields},
    progress::{GenerationProgress, NoGenerationProgress},
    story_provider::{PrimaryProvider, ProviderError, SecondaryProvider},
};
pub use use_cases::generate_story::{GenerateStoryError, GenerateStoryUseCase};
