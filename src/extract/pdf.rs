//! PDF text layer extraction.

use lopdf::Document;

use super::ExtractionError;
use crate::models::FormatKind;

/// Extract the text layer of every page, in page order.
///
/// Pages without text (scans, blank pages) or with an undecodable text layer
/// are skipped rather than failing the whole document.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let document =
        Document::load_mem(bytes).map_err(|e| ExtractionError::failed(FormatKind::Pdf, e))?;

    let pages = document.get_pages();
    let mut page_texts: Vec<String> = Vec::with_capacity(pages.len());

    for page_num in pages.keys() {
        match document.extract_text(&[*page_num]) {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    tracing::debug!("PDF page {} has no text layer", page_num);
                } else {
                    page_texts.push(text.to_string());
                }
            }
            Err(e) => {
                tracing::debug!("Skipping PDF page {}: {}", page_num, e);
            }
        }
    }

    tracing::debug!(
        "PDF text found on {} of {} pages",
        page_texts.len(),
        pages.len()
    );

    Ok(page_texts.join("\n"))
}
