//! Character limits applied by callers before text reaches the model.

/// Outcome of capping a text at a maximum number of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    pub text: String,
    pub truncated: bool,
    /// Character count of the input.
    pub original_chars: usize,
}

/// Keep the first `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> Truncation {
    let original_chars = text.chars().count();
    if original_chars <= max_chars {
        return Truncation {
            text: text.to_string(),
            truncated: false,
            original_chars,
        };
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map_or(text.len(), |(idx, _)| idx);

    tracing::warn!(
        "Extracted text truncated from {} to {} characters",
        original_chars,
        max_chars
    );

    Truncation {
        text: text[..cut].to_string(),
        truncated: true,
        original_chars,
    }
}
