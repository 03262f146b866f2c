//! Core trait and types for summarizer implementations.
//!
//! This crate provides the shared interface for all summarizer backends
//! in the Scribe transcript service. It defines:
//!
//! - [`Summarizer`] - The trait that all summarizer implementations must implement
//! - [`CompletionRequest`] - The input for a single completion call
//! - [`SummarizerError`] - Error types for summarizer operations
//!
//! # Example
//!
//! ```rust
//! use summarizer_core::{CompletionRequest, Summarizer, SummarizerError};
//! use async_trait::async_trait;
//!
//! struct MySummarizer;
//!
//! #[async_trait]
//! impl Summarizer for MySummarizer {
//!     async fn complete(&self, request: CompletionRequest) -> Result<String, SummarizerError> {
//!         Ok(format!("summary of {} chars", request.user.len()))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MySummarizer"
//!     }
//! }
//! ```

mod error;
mod request;
mod trait_def;

pub use error::SummarizerError;
pub use request::{CompletionRequest, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
pub use trait_def::Summarizer;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
