//! Shared utility functions.

/// First `max_chars` characters of `s`, with `...` appended when cut.
///
/// Used to keep user prompts and provider replies short in log lines.
pub fn preview(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_is_unchanged() {
        assert_eq!(preview("hi", 10), "hi");
        assert_eq!(preview("exact", 5), "exact");
    }

    #[test]
    fn preview_cuts_on_char_boundary() {
        assert_eq!(preview("hello world", 5), "hello...");
        assert_eq!(preview("あのね", 2), "あの...");
    }
}
