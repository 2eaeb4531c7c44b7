//! # Default Prompt Text
//!
//! The persona can be overridden through the server configuration; the
//! section headings below are fixed.

/// The persona prepended to every prompt.
pub const DEFAULT_PERSONA: &str = r#"You are a helpful AI assistant. You can answer questions about uploaded documents or provide general assistance.

When answering questions about uploaded documents, provide accurate and detailed responses based on the content. For general questions without document context, provide helpful and informative answers."#;

/// How many previous exchanges are replayed to the model.
pub const HISTORY_WINDOW: usize = 5;

/// How many characters of a document the preview shows.
pub const PREVIEW_CHARS: usize = 1000;

pub const DOCUMENT_HEADING: &str = "Document Content:";
pub const CONVERSATION_HEADING: &str = "Previous Conversation:";
pub const QUESTION_LABEL: &str = "Current User Question:";
