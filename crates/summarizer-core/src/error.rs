//! Error types for summarizer operations.

use thiserror::Error;

/// Errors that can occur while running a completion.
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// No backend credential is configured.
    #[error("summarizer unavailable: {0}")]
    Unavailable(String),

    /// The request never reached the backend.
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the request or returned an unparseable reply.
    #[error("backend error: {0}")]
    Backend(String),

    /// The backend replied without any usable text.
    #[error("backend returned an empty response")]
    EmptyResponse,

    /// The call exceeded its time budget.
    #[error("completion timed out")]
    Timeout,

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
