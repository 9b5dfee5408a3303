//! Plain-text decoding.

/// Decode bytes as UTF-8, replacing invalid sequences with U+FFFD.
/// A leading byte order mark is dropped. Never fails.
pub fn extract(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{feff}').unwrap_or(&text).to_string()
}
