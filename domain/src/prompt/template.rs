//! Prompt templates for story generation

/// Number of narrative framings produced for each prompt
pub const VARIANT_COUNT: usize = 4;

const PREAMBLES: [&str; VARIANT_COUNT] = [
    "Write an inspiring story about a skilled craftsperson who creates beautiful handmade items.",
    "Tell a heartwarming tale of an artisan who preserves traditional crafting techniques.",
    "Create a story about a dedicated artist who finds joy in their creative work.",
    "Write about a master craftsperson who teaches their skills to others.",
];

/// Templates for generating prompts sent to story providers
pub struct StoryPromptTemplate;

impl StoryPromptTemplate {
    /// Wrap an already-sanitized prompt in each narrative framing.
    ///
    /// Order: craftsperson, technique preservation, dedicated artist,
    /// teaching mentor.
    pub fn variants(sanitized_prompt: &str) -> PromptVariants {
        PromptVariants(PREAMBLES.map(|preamble| format!("{} {}", preamble, sanitized_prompt)))
    }

    /// System prompt for chat-style secondary providers
    pub fn storyteller_system() -> &'static str {
        "You are a creative storyteller who writes inspiring stories about artisans and craftspeople."
    }
}

/// The ordered set of framed prompts for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptVariants([String; VARIANT_COUNT]);

impl PromptVariants {
    /// Index used on a 1-based attempt; later attempts reuse the last variant.
    pub fn index_for_attempt(attempt: u32) -> usize {
        (attempt.saturating_sub(1) as usize).min(VARIANT_COUNT - 1)
    }

    /// Variant used on a 1-based attempt
    pub fn for_attempt(&self, attempt: u32) -> &str {
        &self.0[Self::index_for_attempt(attempt)]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
