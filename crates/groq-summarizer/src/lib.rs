//! Groq-based summarizer implementation.
//!
//! Talks to the Groq OpenAI-compatible chat completions API and maps its
//! failure modes onto [`summarizer_core::SummarizerError`]. Selected at
//! process startup when `GROQ_API_KEY` is configured; callers fall back to
//! the local summarizer otherwise.

mod api_types;
mod client;
mod config;

pub use client::GroqSummarizer;
pub use config::{GroqConfig, GroqConfigBuilder};

// Re-export core types for convenience
pub use summarizer_core::{CompletionRequest, Summarizer, SummarizerError};
