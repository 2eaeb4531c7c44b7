//! # Document Q&A
//!
//! Core library for a document question-answering assistant. It loads the text
//! of an uploaded document, assembles prompts from a persona, that document and
//! recent conversation, and sends them to a hosted generative model.
//!
//! - [`prompts`]: prompt assembly and document preview.
//! - [`providers`]: the `AiProvider` trait, Gemini and OpenAI-compatible clients.
//! - [`chat`]: chat history and the error-swallowing response client.
//! - [`session`]: per-user state tying the above together.
//! - [`ingest`]: the document loader contract shared with the loader crates.

pub mod chat;
pub mod errors;
pub mod ingest;
pub mod prompts;
pub mod providers;
pub mod session;
pub mod types;

pub use errors::QaError;
pub use session::Session;
pub use types::{Exchange, ProviderConfig};
