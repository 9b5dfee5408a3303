//! Officio - document text extraction and output normalization.
//!
//! The crate is the non-trivial core behind the Officio office assistant:
//! - `extract`: turns uploaded PDF, DOCX, Outlook `.msg`, RFC822 `.eml` and
//!   plain-text files into a single plain-text string
//! - `normalize`: rewrites model output (English dates to `DD.MM.YYYY`,
//!   `ß` to `ss`)
//!
//! HTTP routing, prompt construction and the language-model client live in the
//! host service. Configuration is always passed in explicitly; nothing here
//! reads the process environment.

pub mod config;
pub mod extract;
pub mod limits;
pub mod logging;
pub mod models;
pub mod normalize;
mod utils;

pub use config::{ConfigError, Settings};
pub use extract::{ExtractionError, Extractor};
pub use limits::{truncate_chars, Truncation};
pub use models::{FormatKind, RawDocument};
pub use normalize::Normalizer;
