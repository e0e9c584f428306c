//! Model value object for the primary story provider

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Allow-listed primary-provider models (Value Object)
///
/// Requests naming anything outside this list are rejected before
/// any provider is contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StoryModel {
    #[default]
    Gemini15Flash,
    Gemini15Pro,
    Gemini10Pro,
}

impl StoryModel {
    /// Every model accepted by the story endpoint, in allow-list order
    pub const ALL: [StoryModel; 3] = [
        StoryModel::Gemini15Flash,
        StoryModel::Gemini15Pro,
        StoryModel::Gemini10Pro,
    ];

    /// Models tried after the requested one, in order
    pub const FALLBACKS: [StoryModel; 2] = [StoryModel::Gemini15Pro, StoryModel::Gemini10Pro];

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryModel::Gemini15Flash => "gemini-1.5-flash",
            StoryModel::Gemini15Pro => "gemini-1.5-pro",
            StoryModel::Gemini10Pro => "gemini-1.0-pro",
        }
    }

    /// Identifiers of every allow-listed model
    pub fn identifiers() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.as_str()).collect()
    }

    /// Ordered candidate list for a request: the requested model first,
    /// then the fixed fallbacks.
    ///
    /// Always three entries. When the requested model is itself a fallback
    /// it appears twice and is called twice per attempt.
    pub fn candidates(self) -> Vec<StoryModel> {
        let mut models = Vec::with_capacity(1 + Self::FALLBACKS.len());
        models.push(self);
        models.extend(Self::FALLBACKS);
        models
    }
}

impl std::fmt::Display for StoryModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StoryModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| DomainError::InvalidModel(s.to_string()))
    }
}

impl Serialize for StoryModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StoryModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allow_listed_models() {
        for model in StoryModel::ALL {
            let parsed: StoryModel = model.as_str().parse().unwrap();
            assert_eq!(parsed, model);
        }
    }

    #[test]
    fn test_unknown_model_rejected() {
        let err = "not-a-real-model".parse::<StoryModel>().unwrap_err();
        assert_eq!(err, DomainError::InvalidModel("not-a-real-model".to_string()));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Gemini-1.5-Flash".parse::<StoryModel>().is_err());
    }

    #[test]
    fn test_candidates_put_requested_first() {
        assert_eq!(
            StoryModel::Gemini15Flash.candidates(),
            vec![
                StoryModel::Gemini15Flash,
                StoryModel::Gemini15Pro,
                StoryModel::Gemini10Pro
            ]
        );
    }

    #[test]
    fn test_candidates_keep_duplicates() {
        let candidates = StoryModel::Gemini15Pro.candidates();
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0], StoryModel::Gemini15Pro);
        assert_eq!(candidates[1], StoryModel::Gemini15Pro);
    }

    #[test]
    fn test_default_model() {
        assert_eq!(StoryModel::default().as_str(), "gemini-1.5-flash");
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        let ok: StoryModel = serde_json::from_str("\"gemini-1.0-pro\"").unwrap();
        assert_eq!(ok, StoryModel::Gemini10Pro);
        assert!(serde_json::from_str::<StoryModel>("\"gpt-4\"").is_err());
    }
}
