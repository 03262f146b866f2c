//! Delayed summarizer - wraps another summarizer with artificial delay.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use summarizer_core::{CompletionRequest, Summarizer, SummarizerError};

/// A summarizer that wraps another summarizer and adds artificial delay.
///
/// Useful for testing timeout handling and simulating backend latency.
pub struct DelayedSummarizer<S: Summarizer> {
    inner: S,
    delay: Duration,
}

impl<S: Summarizer> DelayedSummarizer<S> {
    /// Wrap `inner` with the specified delay before each call.
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a summarizer with a delay in milliseconds.
    pub fn with_millis(inner: S, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Create a summarizer with a delay in seconds.
    pub fn with_secs(inner: S, secs: u64) -> Self {
        Self::new(inner, Duration::from_secs(secs))
    }
}

#[async_trait]
impl<S: Summarizer> Summarizer for DelayedSummarizer<S> {
    async fn complete(&self, request: CompletionRequest) -> Result<String, SummarizerError> {
        sleep(self.delay).await;
        self.inner.complete(request).await
    }

    fn name(&self) -> &str {
        "DelayedSummarizer"
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}
