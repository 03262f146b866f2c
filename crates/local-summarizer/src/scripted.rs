//! Scripted summarizer - pops one pre-seeded result per call.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use summarizer_core::{CompletionRequest, Summarizer, SummarizerError};

/// A summarizer that replays a fixed sequence of results, one per call.
///
/// Lets a test make a specific pipeline stage fail (for example the polish
/// call) while earlier stages succeed. Once the script is exhausted, every
/// further call fails with a backend error.
pub struct ScriptedSummarizer {
    script: Mutex<VecDeque<Result<String, SummarizerError>>>,
}

impl ScriptedSummarizer {
    /// Create a summarizer that replays `script` in order.
    pub fn new(script: Vec<Result<String, SummarizerError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }

    /// Number of scripted results not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.lock().expect("script lock poisoned").len()
    }
}

#[async_trait]
impl Summarizer for ScriptedSummarizer {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, SummarizerError> {
        self.script
            .lock()
            .expect("script lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(SummarizerError::Backend("script exhausted".to_string())))
    }

    fn name(&self) -> &str {
        "ScriptedSummarizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_in_order() {
        let summarizer = ScriptedSummarizer::new(vec![
            Ok("first".to_string()),
            Err(SummarizerError::Timeout),
            Ok("third".to_string()),
        ]);
        let request = CompletionRequest::new("system", "text");

        assert_eq!(summarizer.complete(request.clone()).await.unwrap(), "first");
        assert!(matches!(
            summarizer.complete(request.clone()).await,
            Err(SummarizerError::Timeout)
        ));
        assert_eq!(summarizer.complete(request.clone()).await.unwrap(), "third");

        // Exhausted script keeps failing
        assert!(summarizer.complete(request).await.is_err());
        assert_eq!(summarizer.remaining(), 0);
    }
}
