//! # Document Loading
//!
//! Shared types for turning an uploaded file into plain text. The concrete
//! loaders live in the `docqa-pdf` and `docqa-text` crates and implement
//! [`DocumentLoader`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompts::document_preview;

/// Errors raised while extracting text from an upload.
///
/// None of these are fatal: the caller reports them and the session keeps
/// whatever document it had before.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Error reading PDF: {0}")]
    Parse(String),
    #[error("Error reading TXT file: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("The document contains no extractable text")]
    Empty,
    #[error("Unsupported file type: {0}. Please upload a PDF or TXT file")]
    Unsupported(String),
    #[error("File is too large ({0} bytes)")]
    TooLarge(usize),
    #[error("Document extraction task failed: {0}")]
    Task(String),
}

/// The two accepted upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    /// Resolves the kind of an upload from its declared MIME type and name.
    ///
    /// A declared `application/pdf` is a PDF and any other specific type is
    /// read as text. With no usable MIME type the extension decides.
    pub fn from_upload(
        content_type: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<Self, LoadError> {
        let mime = content_type
            .map(|ct| ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase())
            .filter(|ct| !ct.is_empty() && ct != "application/octet-stream");

        if let Some(mime) = mime {
            return Ok(if mime == "application/pdf" {
                DocumentKind::Pdf
            } else {
                DocumentKind::Text
            });
        }

        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => Ok(DocumentKind::Pdf),
            Some("txt") => Ok(DocumentKind::Text),
            _ => Err(LoadError::Unsupported(
                file_name.unwrap_or("unnamed upload").to_string(),
            )),
        }
    }
}

/// A successfully extracted document. The text is never empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadedDocument {
    pub name: String,
    pub kind: DocumentKind,
    pub text: String,
}

impl LoadedDocument {
    pub fn new(
        name: impl Into<String>,
        kind: DocumentKind,
        text: String,
    ) -> Result<Self, LoadError> {
        if text.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self {
            name: name.into(),
            kind,
            text,
        })
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn preview(&self) -> String {
        document_preview(&self.text)
    }
}

/// Extracts plain text from the raw bytes of one upload.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load(&self, bytes: &[u8]) -> Result<String, LoadError>;
}
