//! Chunked long-transcript summarization pipeline.
//!
//! This crate provides the [`SummarizationPipeline`] type which turns an
//! arbitrarily long transcript plus a steering instruction into one
//! bounded-length summary. It degrades quality rather than availability:
//! every backend failure is absorbed locally and `generate` always returns
//! usable text.
//!
//! # Architecture
//!
//! ```text
//! Transcript (any length)
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        PIPELINE                             │
//! │                                                             │
//! │  1. Guard: blank transcript → fixed sentinel, no calls      │
//! │         ↓                                                   │
//! │  2. Chunk: mechanical 12k-char cuts, order preserved        │
//! │         ↓                                                   │
//! │  3. Summarize each chunk (backend; local fallback per call) │
//! │         ↓                                                   │
//! │  4. Merge partials (backend; deterministic concat fallback) │
//! │         ↓                                                   │
//! │  5. Polish (best-effort; skipped without a backend)         │
//! └─────────────────────────────────────────────────────────────┘
//!          ↓
//! Final summary text (never an error)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use pipeline::{PipelineConfig, SummarizationPipeline};
//!
//! #[tokio::main]
//! async fn main() {
//!     // No backend configured: every stage uses the local fallback.
//!     let pipeline = SummarizationPipeline::without_backend();
//!
//!     let summary = pipeline
//!         .generate("Alice: shipping slips a week\nBob: ok, update the plan", None)
//!         .await;
//!     println!("{}", summary);
//! }
//! ```

mod chunk;
mod config;
mod pipeline;
mod prompts;

pub use chunk::chunk_text;
pub use config::PipelineConfig;
pub use pipeline::SummarizationPipeline;
pub use prompts::{
    merge_fallback, DEFAULT_INSTRUCTION, EMPTY_TRANSCRIPT_SENTINEL, SYSTEM_DIRECTIVE,
};

// Re-export commonly used types from dependencies
pub use local_summarizer::LocalSummarizer;
pub use summarizer_core::{CompletionRequest, Summarizer, SummarizerError};
