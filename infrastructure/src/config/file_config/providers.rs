//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};

/// Resolve an API key: the direct value wins, then the named environment variable.
///
/// Empty strings count as unset.
fn resolve_api_key_with(
    direct: Option<&str>,
    env_var: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    direct
        .map(str::to_string)
        .or_else(|| lookup(env_var))
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Gemini API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GOOGLE_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GOOGLE_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_secs: 60,
        }
    }
}

impl FileGeminiConfig {
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_api_key_with(self.api_key.as_deref(), &self.api_key_env, env_lookup)
    }
}

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API (can be overridden for compatible servers).
    pub base_url: String,
    /// Chat completion model.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            timeout_secs: 60,
        }
    }
}

impl FileOpenAiConfig {
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_api_key_with(self.api_key.as_deref(), &self.api_key_env, env_lookup)
    }
}

/// Hugging Face Inference API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHuggingFaceConfig {
    /// Environment variable name for the API key (default: "HUGGINGFACE_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL for the inference API.
    pub base_url: String,
    /// Hosted model id.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileHuggingFaceConfig {
    fn default() -> Self {
        Self {
            api_key_env: "HUGGINGFACE_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api-inference.huggingface.co".to_string(),
            model: "microsoft/DialoGPT-large".to_string(),
            timeout_secs: 60,
        }
    }
}

impl FileHuggingFaceConfig {
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_api_key_with(self.api_key.as_deref(), &self.api_key_env, env_lookup)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Primary provider.
    pub gemini: FileGeminiConfig,
    /// First secondary provider.
    pub openai: FileOpenAiConfig,
    /// Second secondary provider.
    pub huggingface: FileHuggingFaceConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "SET_KEY" => Some("from-env".to_string()),
            "BLANK_KEY" => Some("   ".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_direct_key_wins() {
        assert_eq!(
            resolve_api_key_with(Some("direct"), "SET_KEY", lookup),
            Some("direct".to_string())
        );
    }

    #[test]
    fn test_env_key_used_when_no_direct() {
        assert_eq!(
            resolve_api_key_with(None, "SET_KEY", lookup),
            Some("from-env".to_string())
        );
    }

    #[test]
    fn test_missing_or_blank_is_none() {
        assert_eq!(resolve_api_key_with(None, "UNSET_KEY", lookup), None);
        assert_eq!(resolve_api_key_with(None, "BLANK_KEY", lookup), None);
        assert_eq!(resolve_api_key_with(Some(""), "UNSET_KEY", lookup), None);
    }

    #[test]
    fn test_resolve_from_config_value() {
        let config = FileGeminiConfig {
            api_key: Some("abc".to_string()),
            api_key_env: "ARTISAN_TEST_DEFINITELY_UNSET".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), Some("abc".to_string()));
    }
}
