//! Core domain concepts shared across all subdomains.
//!
//! - [`model::StoryModel`]: allow-listed primary-provider models
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
