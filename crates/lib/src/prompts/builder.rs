use super::core::{
    CONVERSATION_HEADING, DOCUMENT_HEADING, HISTORY_WINDOW, PREVIEW_CHARS, QUESTION_LABEL,
};
use crate::types::Exchange;

/// Assembles the prompt sent to the model.
///
/// Order is fixed: persona, then the document (when present), then the last
/// [`HISTORY_WINDOW`] exchanges (when any), then the question. The document is
/// injected in full; there is no length cap.
pub fn build_prompt(
    persona: &str,
    question: &str,
    document: Option<&str>,
    history: &[Exchange],
) -> String {
    let mut conversation = String::new();
    if !history.is_empty() {
        conversation.push_str("\n\n");
        conversation.push_str(CONVERSATION_HEADING);
        conversation.push('\n');
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        for exchange in &history[start..] {
            conversation.push_str(&format!(
                "User: {}\nAssistant: {}\n\n",
                exchange.question, exchange.answer
            ));
        }
    }

    match document.filter(|text| !text.is_empty()) {
        Some(text) => format!(
            "{persona}\n\n{DOCUMENT_HEADING}\n{text}{conversation}\n{QUESTION_LABEL} {question}"
        ),
        None => format!("{persona}{conversation}\n{QUESTION_LABEL} {question}"),
    }
}

/// The first [`PREVIEW_CHARS`] characters of a document, with `...` appended
/// when the text was cut.
pub fn document_preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
