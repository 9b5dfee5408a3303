//! Text extraction from uploaded documents.
//!
//! Dispatch is driven by the filename suffix only (see `FormatKind`):
//! - `pdf`: per-page text layer via lopdf, image-only pages contribute nothing
//! - `docx`: top-level body paragraphs via docx-rs
//! - `msg`: Outlook message decoded through a scoped temporary file
//! - `eml`: RFC822 message, text and HTML parts in order
//! - `txt`: lossy UTF-8
//!
//! Every routine's output passes through the same sanitizer, and a
//! whitespace-only result is reported as `ExtractionError::EmptyResult`.

mod docx;
mod email;
mod outlook;
mod pdf;
mod text;

use std::fmt::Display;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Settings;
use crate::models::{file_extension, FormatKind, RawDocument};
use crate::utils::sanitize;

pub use outlook::MailHeaders;

/// Errors that can occur during text extraction.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The filename suffix is not in the dispatch table. Carries the
    /// lower-cased suffix, empty when the filename had none.
    #[error("Unsupported file type: '{0}'")]
    UnsupportedFormat(String),

    /// The format-specific parser rejected the document.
    #[error("Extraction failed for {format} document: {reason}")]
    ExtractionFailed { format: FormatKind, reason: String },

    /// The document parsed but contained only whitespace.
    #[error("No extractable text in {0} document")]
    EmptyResult(FormatKind),
}

impl ExtractionError {
    pub(crate) fn failed(format: FormatKind, reason: impl Display) -> Self {
        Self::ExtractionFailed {
            format,
            reason: reason.to_string(),
        }
    }

    /// Format the error refers to, if it got past dispatch.
    pub fn format(&self) -> Option<FormatKind> {
        match self {
            Self::UnsupportedFormat(_) => None,
            Self::ExtractionFailed { format, .. } | Self::EmptyResult(format) => Some(*format),
        }
    }
}

/// Stateless text extractor.
///
/// The only configuration is where Outlook messages are spilled to disk for
/// decoding; `None` uses the system temporary directory.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    scratch_dir: Option<PathBuf>,
}

impl Extractor {
    /// Create an extractor that uses the system temporary directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from service settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            scratch_dir: settings.scratch_dir.clone(),
        }
    }

    /// Set the directory used for temporary decoding files.
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    pub fn scratch_dir(&self) -> Option<&Path> {
        self.scratch_dir.as_deref()
    }

    /// Extract plain text from an uploaded document.
    pub fn extract(&self, document: RawDocument) -> Result<String, ExtractionError> {
        self.extract_bytes(&document.filename, &document.bytes)
    }

    /// Extract plain text from `bytes` uploaded under `filename`.
    pub fn extract_bytes(&self, filename: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
        let format = FormatKind::from_filename(filename);
        if !format.is_supported() {
            let suffix = file_extension(filename).unwrap_or_default().to_lowercase();
            tracing::debug!("Rejecting {}: unsupported suffix '{}'", filename, suffix);
            return Err(ExtractionError::UnsupportedFormat(suffix));
        }

        tracing::debug!(
            "Extracting {} as {} ({} bytes)",
            filename,
            format,
            bytes.len()
        );

        let text = sanitize(&self.extract_format(format, bytes)?);
        if text.trim().is_empty() {
            tracing::warn!("{} parsed as {} but contains no text", filename, format);
            return Err(ExtractionError::EmptyResult(format));
        }

        tracing::info!(
            "Extracted {} characters from {}",
            text.chars().count(),
            filename
        );
        Ok(text)
    }

    /// Run the routine for `format` without sanitizing or the empty check.
    pub fn extract_format(&self, format: FormatKind, bytes: &[u8]) -> Result<String, ExtractionError> {
        match format {
            FormatKind::Pdf => pdf::extract(bytes),
            FormatKind::Docx => docx::extract(bytes),
            FormatKind::LegacyMail => outlook::extract(bytes, self.scratch_dir()),
            FormatKind::MimeEmail => email::extract(bytes),
            FormatKind::PlainText => Ok(text::extract(bytes)),
            FormatKind::Unsupported => Err(ExtractionError::UnsupportedFormat(String::new())),
        }
    }
}
