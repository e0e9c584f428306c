//! Static authoring guidance returned alongside failed or thin stories

use serde::{Deserialize, Serialize};

/// Generic remediation steps attached to non-safety failures
pub const REMEDIATION_SUGGESTIONS: [&str; 3] = [
    "Try using a different model",
    "Make your prompt shorter and more specific",
    "Check your API configuration",
];

/// Advice for writing prompts that pass provider content filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptGuidance {
    pub good_examples: Vec<String>,
    pub avoid: Vec<String>,
    pub tips: Vec<String>,
}

impl PromptGuidance {
    pub fn standard() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            good_examples: owned(&[
                "Write a story about a skilled craftsperson who creates beautiful pottery",
                "Tell a tale of an artisan who preserves traditional weaving techniques",
                "Create a story about a woodworker who teaches their craft to young apprentices",
            ]),
            avoid: owned(&[
                "Specific cultural or ethnic identifiers",
                "Religious references",
                "Political content",
                "References to specific regions that might be sensitive",
            ]),
            tips: owned(&[
                "Focus on universal themes like craftsmanship and dedication",
                "Use general terms like 'traditional' instead of specific cultural references",
                "Emphasize the creative process and artistic journey",
                "Keep prompts positive and uplifting",
            ]),
        }
    }
}

impl Default for PromptGuidance {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guidance_shape() {
        let guidance = PromptGuidance::standard();
        assert_eq!(guidance.good_examples.len(), 3);
        assert_eq!(guidance.avoid.len(), 4);
        assert_eq!(guidance.tips.len(), 4);
    }
}
