//! Swiss orthography: the sharp s is always written as `ss`.

/// Replace every `ß` with `ss`.
pub fn rewrite_orthography(text: &str) -> String {
    text.replace('ß', "ss")
}
