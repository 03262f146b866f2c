//! The Summarizer trait definition.

use async_trait::async_trait;

use crate::error::SummarizerError;
use crate::request::CompletionRequest;

/// A trait for producing summary text from a completion request.
///
/// Implementations range from remote LLM backends to deterministic local
/// substitutes. This trait is object-safe and can be used with
/// `Box<dyn Summarizer>` or `Arc<dyn Summarizer>`.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Run one completion and return the generated text.
    ///
    /// # Arguments
    ///
    /// * `request` - The system directive, user message, and sampling bounds.
    ///
    /// # Returns
    ///
    /// The generated text, or an error if the backend is unavailable,
    /// unreachable, or replied without usable content.
    async fn complete(&self, request: CompletionRequest) -> Result<String, SummarizerError>;

    /// Get a human-readable name for this summarizer implementation.
    fn name(&self) -> &str;

    /// Check if the summarizer can serve completions.
    ///
    /// Default implementation always returns true.
    fn is_available(&self) -> bool {
        true
    }
}
