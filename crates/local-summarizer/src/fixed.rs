//! Fixed summarizer - returns a canned string for every call.

use async_trait::async_trait;

use summarizer_core::{CompletionRequest, Summarizer, SummarizerError};

/// A summarizer that returns the same text for every request.
///
/// Useful for testing pipeline stages without any AI processing.
#[derive(Debug, Clone)]
pub struct FixedSummarizer {
    text: String,
}

impl FixedSummarizer {
    /// Create a summarizer that always answers with `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl Summarizer for FixedSummarizer {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, SummarizerError> {
        Ok(self.text.clone())
    }

    fn name(&self) -> &str {
        "FixedSummarizer"
    }
}
