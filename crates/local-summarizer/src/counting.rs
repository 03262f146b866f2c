//! Counting summarizer - wraps another summarizer and counts calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use summarizer_core::{CompletionRequest, Summarizer, SummarizerError};

/// A summarizer that delegates to an inner summarizer and records how many
/// completions were requested.
///
/// The counter is shared, so tests can keep a handle to it while the
/// summarizer itself is moved into the component under test.
pub struct CountingSummarizer<S: Summarizer> {
    inner: S,
    calls: Arc<AtomicUsize>,
}

impl<S: Summarizer> CountingSummarizer<S> {
    /// Wrap `inner`, starting the counter at zero.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get a handle to the call counter.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Number of completions requested so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<S: Summarizer> Summarizer for CountingSummarizer<S> {
    async fn complete(&self, request: CompletionRequest) -> Result<String, SummarizerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.complete(request).await
    }

    fn name(&self) -> &str {
        "CountingSummarizer"
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}
