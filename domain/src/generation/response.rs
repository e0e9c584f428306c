//! Response shapes returned by the primary provider

/// Stories at or below this many characters are treated as truncated
/// or safety-stub output.
pub const MIN_STORY_CHARS: usize = 50;

/// Whether extracted text clears the minimum-quality gate
pub fn is_acceptable_story(text: &str) -> bool {
    text.chars().count() > MIN_STORY_CHARS
}

/// A successful provider reply, in one of two shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderResponse {
    /// The provider exposed the generated text directly.
    Direct { text: String },
    /// The provider returned raw candidates with nested content parts.
    Candidates(Vec<Candidate>),
}

/// One generated candidate
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Candidate {
    pub parts: Vec<String>,
    pub finish_reason: Option<String>,
}

impl Candidate {
    pub fn new(parts: Vec<String>) -> Self {
        Self {
            parts,
            finish_reason: None,
        }
    }

    pub fn with_finish_reason(mut self, reason: impl Into<String>) -> Self {
        self.finish_reason = Some(reason.into());
        self
    }
}

impl ProviderResponse {
    pub fn direct(text: impl Into<String>) -> Self {
        ProviderResponse::Direct { text: text.into() }
    }

    /// Extract the trimmed story text, if any.
    ///
    /// `Direct` yields its text; `Candidates` yields the first part of the
    /// first candidate. Empty results become `None`.
    pub fn extract_text(&self) -> Option<String> {
        let raw = match self {
            ProviderResponse::Direct { text } => Some(text.as_str()),
            ProviderResponse::Candidates(candidates) => candidates
                .first()
                .and_then(|c| c.parts.first())
                .map(String::as_str),
        }?;

        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}
