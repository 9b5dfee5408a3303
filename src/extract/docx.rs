//! DOCX paragraph extraction.
//!
//! Only top-level body paragraphs are read. Tables, text boxes and drawings
//! are never descended into; headers and footers live in separate parts.

use docx_rs::{read_docx, Document, DocumentChild, Paragraph, ParagraphChild, RunChild};

use super::ExtractionError;
use crate::models::FormatKind;

/// Extract body paragraphs in document order, one per line.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = read_docx(bytes).map_err(|e| ExtractionError::failed(FormatKind::Docx, e))?;

    let paragraphs = body_paragraphs(&docx.document);
    tracing::debug!("DOCX body has {} paragraphs", paragraphs.len());

    Ok(paragraphs.join("\n"))
}

/// Text of each top-level paragraph. Empty paragraphs are kept as blank lines.
fn body_paragraphs(document: &Document) -> Vec<String> {
    document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect()
}

/// Concatenate the runs of a paragraph: text as is, tabs and breaks as
/// whitespace.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for item in &run.children {
                match item {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }
    text
}
