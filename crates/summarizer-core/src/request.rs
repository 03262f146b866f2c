//! Completion request type shared by all summarizer implementations.

use serde::{Deserialize, Serialize};

/// Default sampling temperature for summarization calls.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Default cap on generated tokens per call.
pub const DEFAULT_MAX_TOKENS: u32 = 800;

/// One completion call: a fixed system directive plus a user message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// System directive sent with the call.
    pub system: String,
    /// User message (prompt plus source text).
    pub user: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens the backend may generate.
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Create a request with default temperature and token cap.
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the generated-token cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let request = CompletionRequest::new("system", "user");

        assert_eq!(request.system, "system");
        assert_eq!(request.user, "user");
        assert_eq!(request.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(request.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_builder_overrides() {
        let request = CompletionRequest::new("system", "user")
            .with_temperature(0.7)
            .with_max_tokens(900);

        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.max_tokens, 900);
    }
}
