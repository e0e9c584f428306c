//! Retry loop configuration from TOML (`[generation]` section)

use artisan_application::GenerationParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Attempts per candidate model
    pub max_attempts: u32,
    /// Base of the exponential backoff, in seconds
    pub backoff_base_secs: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            max_attempts: params.max_attempts,
            backoff_base_secs: params.backoff_base.as_secs(),
        }
    }
}

impl FileGenerationConfig {
    /// Convert to application-layer parameters.
    ///
    /// `max_attempts` is clamped to at least 1.
    pub fn to_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_max_attempts(self.max_attempts.max(1))
            .with_backoff_base(Duration::from_secs(self.backoff_base_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_params() {
        let params = FileGenerationConfig::default().to_params();
        assert_eq!(params, GenerationParams::default());
    }

    #[test]
    fn test_zero_attempts_clamped() {
        let config = FileGenerationConfig {
            max_attempts: 0,
            backoff_base_secs: 0,
        };
        let params = config.to_params();
        assert_eq!(params.max_attempts, 1);
        assert_eq!(params.backoff_base, Duration::ZERO);
    }
}
