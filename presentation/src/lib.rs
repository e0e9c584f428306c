//! Presentation layer for artisan-story
//!
//! This crate contains the CLI definitions, the HTTP API, and the reply
//! shapes both of them emit.

pub mod cli;
pub mod http;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use http::{AppState, create_router, serve};
pub use output::StoryReply;
