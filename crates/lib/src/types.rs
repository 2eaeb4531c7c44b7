use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chat::ERROR_PREFIX;

/// Settings for the generative model behind the assistant.
#[derive(Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    /// The type of provider ("gemini" or "local").
    pub provider: String,
    /// The API URL. Derived from `model_name` for Gemini when absent.
    #[serde(default)]
    pub api_url: Option<String>,
    /// A fallback API key used when the browser does not send one.
    #[serde(default)]
    pub api_key: Option<String>,
    pub model_name: String,
}

// The key never reaches logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .finish()
    }
}

/// One question and the answer it received.
///
/// The answer is either the model's text or an error string starting with
/// [`ERROR_PREFIX`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

impl Exchange {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            asked_at: Utc::now(),
        }
    }

    /// Whether the answer is an error string rather than model output.
    pub fn is_error(&self) -> bool {
        self.answer.starts_with(ERROR_PREFIX)
    }
}
