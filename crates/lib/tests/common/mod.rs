#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared helpers for the library tests: a scripted AI provider and tracing
//! setup.

use async_trait::async_trait;
use docqa::{providers::ai::AiProvider, QaError};
use std::fmt::Debug;
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber once per test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

// --- Mock AI Provider for Logic Testing ---
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<String>>>,
    pub responses: Arc<RwLock<Vec<Result<String, String>>>>,
}

impl MockAiProvider {
    /// Responses are handed out in order; `Err` entries simulate API failures.
    pub fn new(responses: Vec<Result<String, String>>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }

    pub fn answering(answers: &[&str]) -> Self {
        Self::new(answers.iter().map(|a| Ok(a.to_string())).collect())
    }

    pub fn prompts(&self) -> Vec<String> {
        self.call_history.read().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, QaError> {
        self.call_history.write().unwrap().push(prompt.to_string());

        match self.responses.write().unwrap().pop() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(QaError::AiApi(message)),
            None => Ok("Default mock response".to_string()),
        }
    }
}
