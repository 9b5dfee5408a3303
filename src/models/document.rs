//! Uploaded document models.
//!
//! A `RawDocument` lives for exactly one extraction call. Its `FormatKind` is
//! resolved from the filename suffix alone; file contents are never sniffed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Container format of an uploaded document, derived from its filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    Pdf,
    Docx,
    /// Outlook `.msg` compound file.
    LegacyMail,
    /// RFC822 message (`.eml`).
    MimeEmail,
    PlainText,
    Unsupported,
}

/// Suffix table used for dispatch. Anything missing here is unsupported.
const SUFFIXES: &[(&str, FormatKind)] = &[
    ("pdf", FormatKind::Pdf),
    ("docx", FormatKind::Docx),
    ("msg", FormatKind::LegacyMail),
    ("eml", FormatKind::MimeEmail),
    ("txt", FormatKind::PlainText),
];

impl FormatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::LegacyMail => "legacy_mail",
            Self::MimeEmail => "mime_email",
            Self::PlainText => "plain_text",
            Self::Unsupported => "unsupported",
        }
    }

    /// Resolve the format from a suffix such as `"PDF"` or `"eml"`.
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_lowercase();
        SUFFIXES
            .iter()
            .find(|(suffix, _)| *suffix == ext)
            .map(|(_, kind)| *kind)
            .unwrap_or(Self::Unsupported)
    }

    /// Resolve the format from a full filename. Filenames without a suffix
    /// (including dotfiles like `.eml`) are unsupported.
    pub fn from_filename(filename: &str) -> Self {
        match file_extension(filename) {
            Some(ext) => Self::from_extension(ext),
            None => Self::Unsupported,
        }
    }

    /// All suffixes the extractor accepts, in table order.
    pub fn supported_extensions() -> impl Iterator<Item = &'static str> {
        SUFFIXES.iter().map(|(suffix, _)| *suffix)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suffix after the last dot of the final path component.
pub(crate) fn file_extension(filename: &str) -> Option<&str> {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// An uploaded file: the name it was sent under plus its raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl RawDocument {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    pub fn format(&self) -> FormatKind {
        FormatKind::from_filename(&self.filename)
    }
}
