//! # Chat History and Response Client
//!
//! Holds the ordered list of question/answer pairs for a session and the
//! single entry point that turns a prompt into an answer string.

use crate::{providers::ai::AiProvider, types::Exchange};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Marks an answer that records a failed model call instead of model output.
pub const ERROR_PREFIX: &str = "Error generating response:";

/// Sends a prompt to the provider and returns the answer text.
///
/// Any failure is rendered as `"Error generating response: {error}"`. The
/// call is made once and never retried.
pub async fn answer(provider: &dyn AiProvider, prompt: &str) -> String {
    match provider.generate(prompt).await {
        Ok(text) => {
            info!(answer_chars = text.chars().count(), "Received model response.");
            text
        }
        Err(e) => {
            warn!("Model call failed: {e}");
            format!("{ERROR_PREFIX} {e}")
        }
    }
}

/// Append-only conversation log; the whole sequence is kept for display.
///
/// Only [`build_prompt`](crate::prompts::build_prompt) decides how much of it
/// is replayed to the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatHistory {
    exchanges: Vec<Exchange>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, exchange: Exchange) {
        self.exchanges.push(exchange);
    }

    pub fn clear(&mut self) {
        self.exchanges.clear();
    }

    pub fn as_slice(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}
