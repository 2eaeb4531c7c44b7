//! # Prompt Assembly
//!
//! The persona preamble and the function that stitches the persona, the
//! loaded document and recent conversation into a single prompt.

pub mod builder;
pub mod core;

pub use builder::{build_prompt, document_preview};
pub use core::{DEFAULT_PERSONA, HISTORY_WINDOW, PREVIEW_CHARS};
