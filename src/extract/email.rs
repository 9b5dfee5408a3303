//! RFC822 (.eml) text extraction.
//!
//! Multipart messages are walked part by part in the order they appear:
//! `text/plain` is kept verbatim, `text/html` is stripped to text and attached
//! `message/rfc822` parts are walked recursively. Single-part messages are
//! decoded as they are.

use mail_parser::{Message, MessageParser, MessagePart, PartType};

use super::ExtractionError;
use crate::models::FormatKind;
use crate::utils::html_to_text;

/// Extract the readable text of an email message.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let message = MessageParser::default()
        .parse(bytes)
        .ok_or_else(|| ExtractionError::failed(FormatKind::MimeEmail, "Failed to parse email"))?;

    let root = message.parts.first().ok_or_else(|| {
        ExtractionError::failed(FormatKind::MimeEmail, "Email has no body part")
    })?;

    if !matches!(root.body, PartType::Multipart(_)) {
        return Ok(single_payload(root));
    }

    let mut segments = Vec::new();
    collect_segments(&message, &mut segments);
    tracing::debug!(
        "Collected {} text segments from {} MIME parts",
        segments.len(),
        message.parts.len()
    );

    Ok(segments.join("\n"))
}

/// Append the text of every text or HTML part of `message` to `segments`.
fn collect_segments(message: &Message<'_>, segments: &mut Vec<String>) {
    for part in &message.parts {
        match &part.body {
            PartType::Text(text) => segments.push(text.to_string()),
            PartType::Html(html) => segments.push(html_to_text(html)),
            PartType::Message(inner) => collect_segments(inner, segments),
            _ => {}
        }
    }
}

/// Payload of a non-multipart message without any conversion.
fn single_payload(part: &MessagePart<'_>) -> String {
    match &part.body {
        PartType::Text(text) | PartType::Html(text) => text.to_string(),
        PartType::Binary(bytes) | PartType::InlineBinary(bytes) => {
            String::from_utf8_lossy(bytes).into_owned()
        }
        PartType::Message(inner) => {
            let mut segments = Vec::new();
            collect_segments(inner, &mut segments);
            segments.join("\n")
        }
        _ => String::new(),
    }
}
