//! Logging infrastructure for generation progress.
//!
//! Provides [`TracingGenerationProgress`], which forwards every step of a
//! story generation request to `tracing` as structured events.

mod tracing_progress;

pub use tracing_progress::TracingGenerationProgress;
