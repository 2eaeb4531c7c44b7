//! # docqa-pdf: PDF Document Loader
//!
//! Extracts the text of an uploaded PDF for the `docqa` assistant. It
//! implements the `DocumentLoader` trait from the core library.

use async_trait::async_trait;
use docqa::ingest::{DocumentLoader, LoadError};
use tracing::{info, instrument, warn};

/// Extracts text from all pages of a PDF synchronously.
///
/// Text is decoded through each page's fonts (encodings and ToUnicode maps),
/// so embedded subset fonts come out as readable text. Pages are visited in
/// order and each page's text is followed by a newline.
pub fn extract_text_from_pdf(pdf_data: &[u8]) -> Result<String, LoadError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_data)
        .map_err(|e| LoadError::Parse(e.to_string()))?;

    let mut full_text = String::new();
    for page in pages {
        full_text.push_str(&page);
        full_text.push('\n');
    }
    Ok(full_text)
}

/// The `DocumentLoader` implementation for PDF uploads.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfLoader;

impl PdfLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentLoader for PdfLoader {
    #[instrument(skip(self, bytes), fields(bytes = bytes.len()))]
    async fn load(&self, bytes: &[u8]) -> Result<String, LoadError> {
        let data = bytes.to_vec();
        let text = tokio::task::spawn_blocking(move || extract_text_from_pdf(&data))
            .await
            .map_err(|e| {
                // The parser panics on some malformed files.
                if e.is_panic() {
                    warn!("PDF parser panicked on upload.");
                    LoadError::Parse("the file is malformed".to_string())
                } else {
                    LoadError::Task(e.to_string())
                }
            })??;
        info!(chars = text.chars().count(), "Extracted text from PDF.");
        Ok(text)
    }
}
