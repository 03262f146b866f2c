//! Deterministic fallback summarizer and test doubles.
//!
//! This crate provides the LLM-free implementations of the `Summarizer`
//! capability:
//! - `LocalSummarizer` - Deterministic line-based fallback used whenever the
//!   remote backend is unavailable or failing
//! - `FixedSummarizer` - Returns a canned string for every call
//! - `FailingSummarizer` - Always returns a chosen error
//! - `CountingSummarizer` - Wraps another summarizer and counts calls
//! - `DelayedSummarizer` - Wraps another summarizer with artificial delay
//! - `ScriptedSummarizer` - Pops one pre-seeded result per call
//!
//! `LocalSummarizer` is production code; the rest exist for exercising
//! fallback, timeout, and call-count behavior in tests.
//!
//! # Example
//!
//! ```rust
//! use local_summarizer::LocalSummarizer;
//!
//! let fallback = LocalSummarizer::new();
//! let summary = fallback.summarize("first point\nsecond point", "");
//! assert!(summary.starts_with("## Summary"));
//! ```

mod counting;
mod delayed;
mod failing;
mod fixed;
mod local;
mod scripted;

// Re-export summarizer-core types for convenience
pub use summarizer_core::{async_trait, CompletionRequest, Summarizer, SummarizerError};

pub use counting::CountingSummarizer;
pub use delayed::DelayedSummarizer;
pub use failing::FailingSummarizer;
pub use fixed::FixedSummarizer;
pub use local::{LocalSummarizer, DEFAULT_MAX_LINES};
pub use scripted::ScriptedSummarizer;
