//! Outlook `.msg` extraction.
//!
//! The compound-file decoder only reads from disk, so the upload is written to
//! a uniquely named temporary file that is removed before this module returns,
//! whether decoding succeeded or not.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use msg_parser::Outlook;
use tempfile::{Builder, NamedTempFile};

use super::ExtractionError;
use crate::models::FormatKind;

fn failed(e: impl std::fmt::Display) -> ExtractionError {
    ExtractionError::failed(FormatKind::LegacyMail, e)
}

/// Header fields rendered above the message body. Missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailHeaders {
    pub from: String,
    pub to: String,
    pub subject: String,
}

impl MailHeaders {
    fn from_outlook(message: &Outlook) -> Self {
        Self {
            from: person_label(&message.sender.name, &message.sender.email),
            to: join_recipients(
                message
                    .to
                    .iter()
                    .map(|person| person_label(&person.name, &person.email)),
            ),
            subject: message.subject.trim().to_string(),
        }
    }

    /// Render the fixed four-line header block followed by `body`.
    pub fn render(&self, body: &str) -> String {
        format!(
            "From: {}\nTo: {}\nSubject: {}\n\n{}",
            self.from, self.to, self.subject, body
        )
    }
}

/// `Name <address>` when both are known, otherwise whichever is present.
fn person_label(name: &str, email: &str) -> String {
    let name = name.trim();
    let email = email.trim();
    match (name.is_empty(), email.is_empty()) {
        (false, false) if name != email => format!("{} <{}>", name, email),
        (false, _) => name.to_string(),
        (true, false) => email.to_string(),
        (true, true) => String::new(),
    }
}

/// Join recipient labels with `, `, keeping the first of any exact repeats.
///
/// The recipient table of a `.msg` holds To, Cc and Bcc entries alike, so the
/// same person can be listed more than once.
fn join_recipients(labels: impl IntoIterator<Item = String>) -> String {
    let mut seen = HashSet::new();
    labels
        .into_iter()
        .filter(|label| !label.is_empty() && seen.insert(label.clone()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn scratch_file(scratch_dir: Option<&Path>) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix("officio-").suffix(".msg");
    match scratch_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
}

/// Decode an Outlook message into a header block plus body text.
pub fn extract(bytes: &[u8], scratch_dir: Option<&Path>) -> Result<String, ExtractionError> {
    let mut file = scratch_file(scratch_dir).map_err(failed)?;
    file.write_all(bytes).map_err(failed)?;
    file.flush().map_err(failed)?;

    tracing::debug!("Decoding Outlook message via {}", file.path().display());
    let decoded = Outlook::from_path(file.path());

    if let Err(e) = file.close() {
        tracing::warn!("Failed to remove temporary message file: {}", e);
    }

    let message = decoded.map_err(failed)?;
    let headers = MailHeaders::from_outlook(&message);
    Ok(headers.render(&message.body))
}
