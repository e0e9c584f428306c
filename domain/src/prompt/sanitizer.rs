//! Neutral-term prompt sanitizer

/// Sensitive term → neutral substitute, applied in this order.
///
/// Matching is exact and case-sensitive with no word boundaries. Each entry
/// runs on the output of the previous one, so `"traditional Indian"` never
/// matches: the standalone `"Indian"` entry has already rewritten it.
pub const NEUTRAL_TERMS: &[(&str, &str)] = &[
    ("Indian", "South Asian"),
    ("traditional Indian", "traditional regional"),
    ("Hindu", "spiritual"),
    ("Muslim", "religious"),
    ("caste", "community"),
    ("tribal", "indigenous"),
];

/// Rewrite sensitive terms in a user prompt and trim surrounding whitespace.
pub fn sanitize(prompt: &str) -> String {
    let neutral = NEUTRAL_TERMS
        .iter()
        .fold(prompt.to_string(), |text, (sensitive, neutral)| {
            text.replace(sensitive, neutral)
        });
    neutral.trim().to_string()
}
