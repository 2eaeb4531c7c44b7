//! # `docqa-text`: Plain Text Document Loader
//!
//! Decodes uploaded `.txt` files for the `docqa` assistant. The decoded text
//! is used as-is: no trimming, chunking or normalisation.

use async_trait::async_trait;
use docqa::ingest::{DocumentLoader, LoadError};
use tracing::debug;

/// Decodes bytes as strict UTF-8.
pub fn decode_text(bytes: &[u8]) -> Result<String, LoadError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// The `DocumentLoader` implementation for plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextLoader;

impl TextLoader {
    /// Creates a new `TextLoader`.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentLoader for TextLoader {
    async fn load(&self, bytes: &[u8]) -> Result<String, LoadError> {
        let text = decode_text(bytes)?;
        debug!(chars = text.chars().count(), "Decoded text upload.");
        Ok(text)
    }
}
