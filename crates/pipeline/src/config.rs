//! Pipeline tuning knobs.

use std::time::Duration;

/// Configuration for the summarization pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Maximum characters per transcript chunk.
    pub chunk_size: usize,

    /// Time budget for each backend call; an overrun counts as a failure.
    pub call_timeout: Duration,

    /// Sampling temperature for every backend call.
    pub temperature: f32,

    /// Generated-token cap for per-chunk calls.
    pub chunk_max_tokens: u32,

    /// Generated-token cap for the merge call.
    pub merge_max_tokens: u32,

    /// Generated-token cap for the polish call.
    pub polish_max_tokens: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: 12_000,
            call_timeout: Duration::from_secs(60),
            temperature: 0.2,
            chunk_max_tokens: 800,
            merge_max_tokens: 900,
            polish_max_tokens: 800,
        }
    }
}

impl PipelineConfig {
    /// Set the chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the per-call timeout.
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}
