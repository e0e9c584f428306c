//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),
}

impl DomainError {
    /// Check if this error rejects a requested model
    pub fn is_invalid_model(&self) -> bool {
        matches!(self, DomainError::InvalidModel(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_model_display() {
        let error = DomainError::InvalidModel("gpt-2".to_string());
        assert_eq!(error.to_string(), "Invalid model: gpt-2");
    }

    #[test]
    fn test_is_invalid_model_check() {
        assert!(DomainError::InvalidModel("x".to_string()).is_invalid_model());
        assert!(!DomainError::UnknownCollection("x".to_string()).is_invalid_model());
    }
}
