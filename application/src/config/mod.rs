//! Application-level configuration.
//!
//! - [`GenerationParams`]: retry loop control for story generation

pub mod generation_params;

pub use generation_params::GenerationParams;
