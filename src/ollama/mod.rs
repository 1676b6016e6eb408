//! Ollama integration: executable discovery, the tags-endpoint client, the
//! prerequisite check, and model registration.

pub mod binary;
pub mod check;
pub mod client;
pub mod create;

#[cfg(test)]
pub(crate) mod tests_helpers;

pub use binary::{OLLAMA_EXECUTABLE, locate_ollama};
pub use check::{CheckOutcome, DEFAULT_CUSTOM_MODEL, PrereqCheck};
pub use client::{
    ClientError, DEFAULT_HOST, ModelEntry, OllamaClient, RegisteredModels, TagsResponse,
};
pub use create::create_model;
