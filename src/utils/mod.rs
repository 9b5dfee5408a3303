//! Shared utility functions.
//!
//! - `html`: markup stripping for HTML mail bodies
//! - `text`: cleanup applied to every extracted text

mod html;
mod text;

pub use html::html_to_text;
pub use text::sanitize;
