//! Main pipeline that coordinates chunking, merging, and polishing.

use std::sync::Arc;

use local_summarizer::LocalSummarizer;
use summarizer_core::{CompletionRequest, Summarizer};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::chunk::chunk_text;
use crate::config::PipelineConfig;
use crate::prompts::{
    chunk_prompt, improve_prompt, merge_fallback, merge_prompt, polish_prompt,
    DEFAULT_IMPROVE_INSTRUCTION, DEFAULT_INSTRUCTION, EMPTY_TRANSCRIPT_SENTINEL, SYSTEM_DIRECTIVE,
};

/// Chunked summarization pipeline with per-call fallback.
///
/// The backend is injected at construction time based on configuration
/// presence; the pipeline never probes the environment itself. Without a
/// backend, every stage uses the deterministic local fallback and no
/// network call is ever attempted.
///
/// Each `generate` invocation is self-contained; concurrent invocations
/// need no coordination. Dropping the `generate` future cancels any
/// in-flight backend call; partial work is discarded.
pub struct SummarizationPipeline {
    backend: Option<Arc<dyn Summarizer>>,
    fallback: LocalSummarizer,
    config: PipelineConfig,
}

impl SummarizationPipeline {
    /// Create a pipeline with an optional backend and explicit configuration.
    pub fn new(backend: Option<Arc<dyn Summarizer>>, config: PipelineConfig) -> Self {
        Self {
            backend,
            fallback: LocalSummarizer::new(),
            config,
        }
    }

    /// Create a pipeline around the given backend with default configuration.
    pub fn with_backend(backend: Arc<dyn Summarizer>) -> Self {
        Self::new(Some(backend), PipelineConfig::default())
    }

    /// Create a backend-less pipeline: deterministic fallback output only.
    pub fn without_backend() -> Self {
        Self::new(None, PipelineConfig::default())
    }

    /// Whether a backend was configured for this pipeline.
    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Name of the configured backend, if any.
    pub fn backend_name(&self) -> Option<&str> {
        self.backend.as_deref().map(|backend| backend.name())
    }

    /// Summarize a transcript under a steering instruction.
    ///
    /// Never fails: backend errors and timeouts are absorbed stage by
    /// stage, degrading to deterministic local output. A blank transcript
    /// short-circuits to a fixed sentinel without any backend call.
    pub async fn generate(&self, transcript: &str, instruction: Option<&str>) -> String {
        if transcript.trim().is_empty() {
            return EMPTY_TRANSCRIPT_SENTINEL.to_string();
        }

        let instruction = instruction
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .unwrap_or(DEFAULT_INSTRUCTION);

        let chunks = chunk_text(transcript, self.config.chunk_size);
        debug!(chunks = chunks.len(), "transcript chunked");

        let mut partials = Vec::with_capacity(chunks.len());
        for (index, chunk) in chunks.iter().enumerate() {
            let partial = self.summarize_chunk(chunk, instruction).await;
            debug!(part = index + 1, total = chunks.len(), "chunk summarized");
            partials.push(partial);
        }

        let merged = self.merge_partials(partials, instruction).await;
        self.polish(merged, instruction).await
    }

    /// Refine an existing summary per the given instructions.
    ///
    /// Best-effort like every other stage: without a backend, or when the
    /// call fails, the input is returned unchanged. An empty summary
    /// yields an empty string.
    pub async fn improve(&self, summary: &str, instructions: Option<&str>) -> String {
        if summary.trim().is_empty() {
            return String::new();
        }

        let instructions = instructions
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .unwrap_or(DEFAULT_IMPROVE_INSTRUCTION);

        let request = CompletionRequest::new(SYSTEM_DIRECTIVE, improve_prompt(summary, instructions))
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.polish_max_tokens);

        match self.call(request).await {
            Some(text) => text,
            None => summary.to_string(),
        }
    }

    /// Summarize one chunk, substituting the local fallback on any failure.
    async fn summarize_chunk(&self, chunk: &str, instruction: &str) -> String {
        let request = CompletionRequest::new(SYSTEM_DIRECTIVE, chunk_prompt(chunk, instruction))
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.chunk_max_tokens);

        match self.call(request).await {
            Some(text) => text,
            None => self.fallback.summarize(chunk, instruction),
        }
    }

    /// Combine partial summaries into one result.
    ///
    /// A single partial passes through unchanged. With multiple partials,
    /// failure of the merge call falls back to a deterministic
    /// concatenation that preserves chunk order.
    async fn merge_partials(&self, partials: Vec<String>, instruction: &str) -> String {
        if partials.len() == 1 {
            return partials.into_iter().next().unwrap_or_default();
        }

        let request = CompletionRequest::new(SYSTEM_DIRECTIVE, merge_prompt(&partials, instruction))
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.merge_max_tokens);

        match self.call(request).await {
            Some(text) => text,
            None => merge_fallback(&partials),
        }
    }

    /// Best-effort tightening pass over the merged text.
    ///
    /// Skipped entirely without a backend; a failed call returns the
    /// pre-polish text unchanged. This stage never fails the overall call.
    async fn polish(&self, merged: String, instruction: &str) -> String {
        if self.backend.is_none() {
            return merged;
        }

        let request = CompletionRequest::new(SYSTEM_DIRECTIVE, polish_prompt(&merged, instruction))
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.polish_max_tokens);

        match self.call(request).await {
            Some(text) => text,
            None => merged,
        }
    }

    /// Run one backend call under the configured timeout.
    ///
    /// Returns `None` when no backend is configured, the call errors, it
    /// times out, or it yields blank text; callers substitute their
    /// stage-specific fallback.
    async fn call(&self, request: CompletionRequest) -> Option<String> {
        let backend = self.backend.as_ref()?;

        match timeout(self.config.call_timeout, backend.complete(request)).await {
            Ok(Ok(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    warn!(backend = backend.name(), "backend returned blank text, falling back");
                    None
                } else {
                    Some(text.to_string())
                }
            }
            Ok(Err(err)) => {
                warn!(backend = backend.name(), error = %err, "backend call failed, falling back");
                None
            }
            Err(_) => {
                warn!(
                    backend = backend.name(),
                    timeout_secs = self.config.call_timeout.as_secs(),
                    "backend call timed out, falling back"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use local_summarizer::{FailingSummarizer, FixedSummarizer};

    #[tokio::test]
    async fn test_blank_transcript_returns_sentinel() {
        let pipeline = SummarizationPipeline::without_backend();

        assert_eq!(pipeline.generate("", None).await, EMPTY_TRANSCRIPT_SENTINEL);
        assert_eq!(
            pipeline.generate("   \n\t ", None).await,
            EMPTY_TRANSCRIPT_SENTINEL
        );
    }

    #[tokio::test]
    async fn test_single_chunk_passes_backend_text_through() {
        let backend = Arc::new(FixedSummarizer::new("## Summary\n- one point"));
        let pipeline =
            SummarizationPipeline::new(Some(backend), PipelineConfig::default());

        let summary = pipeline.generate("short transcript", None).await;
        assert_eq!(summary, "## Summary\n- one point");
    }

    #[tokio::test]
    async fn test_failing_backend_degrades_to_local_fallback() {
        let backend = Arc::new(FailingSummarizer::backend("rate limited"));
        let pipeline =
            SummarizationPipeline::new(Some(backend), PipelineConfig::default());

        let summary = pipeline.generate("line one\nline two", None).await;
        assert_eq!(summary, "## Summary\n- line one\n- line two");
    }

    #[tokio::test]
    async fn test_improve_without_backend_returns_input() {
        let pipeline = SummarizationPipeline::without_backend();

        let improved = pipeline.improve("## Summary\n- kept", None).await;
        assert_eq!(improved, "## Summary\n- kept");
    }

    #[tokio::test]
    async fn test_improve_blank_summary_returns_empty() {
        let pipeline = SummarizationPipeline::without_backend();
        assert_eq!(pipeline.improve("  ", None).await, "");
    }

    #[test]
    fn test_backend_introspection() {
        let pipeline = SummarizationPipeline::without_backend();
        assert!(!pipeline.has_backend());
        assert_eq!(pipeline.backend_name(), None);

        let backed = SummarizationPipeline::with_backend(Arc::new(FixedSummarizer::new("x")));
        assert!(backed.has_backend());
        assert_eq!(backed.backend_name(), Some("FixedSummarizer"));
    }
}
