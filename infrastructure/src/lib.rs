//! Infrastructure layer for artisan-story
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use logging::TracingGenerationProgress;
pub use providers::{GeminiAdapter, HuggingFaceAdapter, OpenAiAdapter};
pub use store::InMemoryDocumentStore;
