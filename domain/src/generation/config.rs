//! Fixed request settings sent to the primary provider

use serde::{Deserialize, Serialize};

/// Sampling parameters for story generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,
}

impl GenerationConfig {
    /// Settings used for every primary-provider story request
    pub const STORY: GenerationConfig = GenerationConfig {
        temperature: 0.7,
        max_output_tokens: 1000,
        top_p: 0.95,
        top_k: 40,
    };
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::STORY
    }
}

/// Harm categories a provider can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

impl HarmCategory {
    pub const ALL: [HarmCategory; 4] = [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ];
}

/// Severity at which a provider should block content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockThreshold {
    BlockNone,
    BlockOnlyHigh,
    BlockMediumAndAbove,
    BlockLowAndAbove,
}

/// One category/threshold pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: BlockThreshold,
}

impl SafetySetting {
    /// Block only high-severity content in every category
    pub fn permissive() -> Vec<SafetySetting> {
        HarmCategory::ALL
            .into_iter()
            .map(|category| SafetySetting {
                category,
                threshold: BlockThreshold::BlockOnlyHigh,
            })
            .collect()
    }
}
