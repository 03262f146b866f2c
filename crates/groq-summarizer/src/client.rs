//! GroqSummarizer implementation using the Groq chat completions API.

use reqwest::Client;
use summarizer_core::{async_trait, CompletionRequest, Summarizer, SummarizerError};
use tracing::{debug, info};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::GroqConfig;

/// A summarizer implementation backed by Groq's OpenAI-compatible API.
///
/// Stateless: every completion is an independent request built from the
/// supplied system directive and user message.
pub struct GroqSummarizer {
    client: Client,
    config: GroqConfig,
}

impl GroqSummarizer {
    /// Create a new GroqSummarizer with the given configuration.
    pub fn new(config: GroqConfig) -> Result<Self, SummarizerError> {
        let client = Client::builder().timeout(config.timeout).build().map_err(|e| {
            SummarizerError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!(
            model = %config.model,
            timeout_secs = config.timeout.as_secs(),
            "GroqSummarizer initialized"
        );

        Ok(Self { client, config })
    }

    /// Create a GroqSummarizer from environment variables.
    ///
    /// See [`GroqConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, SummarizerError> {
        let config = GroqConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GroqConfig {
        &self.config
    }

    /// Make a chat completion request to the Groq API.
    async fn chat_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<ChatCompletionResponse, SummarizerError> {
        let url = format!("{}/v1/chat/completions", self.config.api_url);

        let body = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(&request.system),
                ChatMessage::user(&request.user),
            ],
            max_tokens: Some(request.max_tokens),
            temperature: Some(request.temperature),
        };

        debug!(model = %body.model, "Sending request to Groq API");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SummarizerError::Timeout
                } else {
                    SummarizerError::Network(format!("Failed to send request: {}", e))
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(SummarizerError::Backend(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(SummarizerError::Backend(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            SummarizerError::Backend(format!("Failed to parse response: {}", e))
        })?;

        Ok(completion)
    }
}

#[async_trait]
impl Summarizer for GroqSummarizer {
    async fn complete(&self, request: CompletionRequest) -> Result<String, SummarizerError> {
        let completion = self.chat_completion(&request).await?;

        // Log usage if available
        if let Some(usage) = &completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Token usage"
            );
        }

        let text = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(SummarizerError::EmptyResponse);
        }

        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "GroqSummarizer"
    }
}
