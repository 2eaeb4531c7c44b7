pub mod gemini;
pub mod local;

use crate::errors::QaError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a hosted text-generation model.
///
/// Implementations take one fully assembled prompt and return one completion.
/// They make a single attempt; callers decide what a failure means.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a completion for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, QaError>;
}

dyn_clone::clone_trait_object!(AiProvider);
