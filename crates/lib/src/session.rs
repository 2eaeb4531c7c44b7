//! # Session State
//!
//! One user's document and conversation. Every mutation goes through `&mut
//! self`, so whoever owns the session serializes its actions.

use crate::{
    chat::{answer, ChatHistory},
    ingest::LoadedDocument,
    prompts::build_prompt,
    providers::ai::AiProvider,
    types::Exchange,
};
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    last_active: Instant,
    document: Option<LoadedDocument>,
    history: ChatHistory,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates an empty session with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            last_active: Instant::now(),
            document: None,
            history: ChatHistory::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Marks the session as in use.
    pub fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    /// Time since the session was created or last touched.
    pub fn idle_for(&self) -> Duration {
        self.last_active.elapsed()
    }

    pub fn document(&self) -> Option<&LoadedDocument> {
        self.document.as_ref()
    }

    pub fn document_text(&self) -> Option<&str> {
        self.document.as_ref().map(|doc| doc.text.as_str())
    }

    /// Replaces the current document wholesale.
    pub fn load_document(&mut self, document: LoadedDocument) {
        info!(
            session = %self.id,
            name = %document.name,
            chars = document.char_count(),
            "Document loaded into session."
        );
        self.document = Some(document);
        self.touch();
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    /// The prompt that [`Session::ask`] would send for `question` right now.
    pub fn prompt_for(&self, persona: &str, question: &str) -> String {
        build_prompt(
            persona,
            question,
            self.document_text(),
            self.history.as_slice(),
        )
    }

    /// Asks the model a question and records the exchange.
    ///
    /// Exactly one exchange is appended per call. When the model call fails
    /// the answer is the error string.
    #[instrument(skip(self, provider, persona), fields(session = %self.id))]
    pub async fn ask(
        &mut self,
        provider: &dyn AiProvider,
        persona: &str,
        question: &str,
    ) -> &Exchange {
        let prompt = self.prompt_for(persona, question);
        let response = answer(provider, &prompt).await;
        self.history.push(Exchange::new(question, response));
        self.touch();
        &self.history.as_slice()[self.history.len() - 1]
    }

    pub fn clear_history(&mut self) {
        info!(session = %self.id, cleared = self.history.len(), "Chat history cleared.");
        self.history.clear();
        self.touch();
    }
}
