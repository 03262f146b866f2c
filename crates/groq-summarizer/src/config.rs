//! Configuration for GroqSummarizer.

use std::env;
use std::time::Duration;

use summarizer_core::SummarizerError;

/// Configuration for GroqSummarizer.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// Groq API URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Per-call timeout.
    pub timeout: Duration,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.groq.com/openai".to_string(),
            api_key: String::new(),
            model: "llama-3.3-70b-versatile".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl GroqConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GROQ_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `GROQ_API_URL` - API URL (default: https://api.groq.com/openai)
    /// - `GROQ_MODEL` - Model name (default: llama-3.3-70b-versatile)
    /// - `GROQ_TIMEOUT_SECS` - Per-call timeout in seconds (default: 60)
    pub fn from_env() -> Result<Self, SummarizerError> {
        let api_key = env::var("GROQ_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| SummarizerError::Unavailable("GROQ_API_KEY not set".to_string()))?;

        let api_url = env::var("GROQ_API_URL")
            .unwrap_or_else(|_| "https://api.groq.com/openai".to_string());

        let model = env::var("GROQ_MODEL")
            .ok()
            .map(|model| model.trim().to_string())
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| "llama-3.3-70b-versatile".to_string());

        let timeout = env::var("GROQ_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        Ok(Self {
            api_url,
            api_key,
            model,
            timeout,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> GroqConfigBuilder {
        GroqConfigBuilder::default()
    }
}

/// Builder for GroqConfig.
#[derive(Debug, Default)]
pub struct GroqConfigBuilder {
    config: GroqConfig,
}

impl GroqConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the per-call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GroqConfig {
        self.config
    }
}
