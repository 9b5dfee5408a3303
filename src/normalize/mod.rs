//! Post-processing of generated text.
//!
//! Pure text-to-text rewrites applied to model output before it is returned:
//! English date phrases become `DD.MM.YYYY` and `ß` becomes `ss`. Neither pass
//! can fail; text without anything to rewrite comes back unchanged.

mod dates;
mod orthography;

pub use dates::reformat_dates;
pub use orthography::rewrite_orthography;

/// Output normalizer. Holds no state and can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Rewrite English calendar dates to `DD.MM.YYYY`.
    pub fn dates(&self, text: &str) -> String {
        reformat_dates(text)
    }

    /// Apply the fixed `ß` to `ss` substitution.
    pub fn orthographic(&self, text: &str) -> String {
        rewrite_orthography(text)
    }

    /// Dates first, then orthography.
    pub fn normalize(&self, text: &str) -> String {
        self.orthographic(&self.dates(text))
    }
}
