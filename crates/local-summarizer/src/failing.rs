//! Failing summarizer - always returns a chosen error.

use async_trait::async_trait;

use summarizer_core::{CompletionRequest, Summarizer, SummarizerError};

#[derive(Debug, Clone)]
enum FailureKind {
    Backend(String),
    Network(String),
    Timeout,
    Empty,
    Unavailable(String),
}

/// A summarizer that fails every call with a configurable error.
///
/// Useful for testing fallback substitution on each pipeline stage.
#[derive(Debug, Clone)]
pub struct FailingSummarizer {
    kind: FailureKind,
}

impl FailingSummarizer {
    /// Fail with a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Backend(message.into()),
        }
    }

    /// Fail with a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Network(message.into()),
        }
    }

    /// Fail with a timeout.
    pub fn timeout() -> Self {
        Self {
            kind: FailureKind::Timeout,
        }
    }

    /// Fail with an empty-response error.
    pub fn empty() -> Self {
        Self {
            kind: FailureKind::Empty,
        }
    }

    /// Fail as unavailable.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Unavailable(message.into()),
        }
    }

    fn error(&self) -> SummarizerError {
        match &self.kind {
            FailureKind::Backend(message) => SummarizerError::Backend(message.clone()),
            FailureKind::Network(message) => SummarizerError::Network(message.clone()),
            FailureKind::Timeout => SummarizerError::Timeout,
            FailureKind::Empty => SummarizerError::EmptyResponse,
            FailureKind::Unavailable(message) => SummarizerError::Unavailable(message.clone()),
        }
    }
}

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, SummarizerError> {
        Err(self.error())
    }

    fn name(&self) -> &str {
        "FailingSummarizer"
    }

    fn is_available(&self) -> bool {
        !matches!(self.kind, FailureKind::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_backend_failure() {
        let summarizer = FailingSummarizer::backend("boom");
        let request = CompletionRequest::new("system", "text");

        let err = summarizer.complete(request).await.unwrap_err();
        assert!(matches!(err, SummarizerError::Backend(_)));
    }

    #[tokio::test]
    async fn test_timeout_failure() {
        let summarizer = FailingSummarizer::timeout();
        let request = CompletionRequest::new("system", "text");

        let err = summarizer.complete(request).await.unwrap_err();
        assert!(matches!(err, SummarizerError::Timeout));
    }

    #[test]
    fn test_unavailable_reports_not_available() {
        assert!(!FailingSummarizer::unavailable("no key").is_available());
        assert!(FailingSummarizer::empty().is_available());
    }
}
