//! Data models for documents handed to the extractor.

mod document;

pub(crate) use document::file_extension;
pub use document::{FormatKind, RawDocument};
