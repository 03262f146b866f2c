//! Deterministic line-based fallback summarizer.

use async_trait::async_trait;

use summarizer_core::{CompletionRequest, Summarizer, SummarizerError};

/// Default number of lines kept by the fallback.
pub const DEFAULT_MAX_LINES: usize = 12;

/// A deterministic, LLM-free summarizer.
///
/// Takes the first non-empty trimmed lines of the input and renders them as
/// a Markdown bulleted list under a `## Summary` heading. Intentionally
/// crude: it exists as an availability fallback, not a quality fallback.
/// Same input always yields the same output.
#[derive(Debug, Clone)]
pub struct LocalSummarizer {
    max_lines: usize,
}

impl Default for LocalSummarizer {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

impl LocalSummarizer {
    /// Create a fallback summarizer keeping the default number of lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fallback summarizer keeping at most `max_lines` lines.
    pub fn with_max_lines(max_lines: usize) -> Self {
        Self { max_lines }
    }

    /// Summarize `text` without any external call.
    ///
    /// The instruction is accepted for signature parity with the remote
    /// path but does not influence the output.
    pub fn summarize(&self, text: &str, _instruction: &str) -> String {
        let mut out = String::from("## Summary");
        for line in text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(self.max_lines)
        {
            out.push_str("\n- ");
            out.push_str(line);
        }
        out
    }
}

#[async_trait]
impl Summarizer for LocalSummarizer {
    async fn complete(&self, request: CompletionRequest) -> Result<String, SummarizerError> {
        Ok(self.summarize(&request.user, ""))
    }

    fn name(&self) -> &str {
        "LocalSummarizer"
    }
}
