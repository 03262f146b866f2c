use secrecy::{ExposeSecret, SecretString};
use std::env;

use crate::MailerError;

/// Configuration for the SMTP mailer.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// SMTP host (default: smtp.gmail.com)
    pub smtp_host: String,
    /// SMTP port (default: 465; 465 selects implicit TLS, anything else STARTTLS)
    pub smtp_port: u16,
    /// SMTP username
    pub username: String,
    /// Sender address shown on outgoing mail
    pub from_address: String,
    /// SMTP password
    password: SecretString,
}

impl MailerConfig {
    /// Create a new configuration with explicit values.
    pub fn new(
        smtp_host: impl Into<String>,
        smtp_port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let username = username.into();
        Self {
            smtp_host: smtp_host.into(),
            smtp_port,
            from_address: username.clone(),
            username,
            password: SecretString::from(password.into()),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Required (either prefix):
    /// - `EMAIL_USER` / `SMTP_USER` - SMTP username
    /// - `EMAIL_PASS` / `SMTP_PASS` - SMTP password
    ///
    /// Optional (with defaults):
    /// - `EMAIL_HOST` / `SMTP_HOST` - Default: smtp.gmail.com
    /// - `EMAIL_PORT` / `SMTP_PORT` - Default: 465
    /// - `EMAIL_FROM` / `SMTP_FROM` - Default: the username
    pub fn from_env() -> Result<Self, MailerError> {
        let smtp_host = env_either("EMAIL_HOST", "SMTP_HOST")
            .unwrap_or_else(|| "smtp.gmail.com".to_string());

        let smtp_port = env_either("EMAIL_PORT", "SMTP_PORT")
            .unwrap_or_else(|| "465".to_string())
            .parse::<u16>()
            .map_err(|e| MailerError::Config(format!("Invalid SMTP port: {}", e)))?;

        let username = env_either("EMAIL_USER", "SMTP_USER")
            .ok_or_else(|| MailerError::MissingEnvVar("EMAIL_USER".to_string()))?;

        let password = env_either("EMAIL_PASS", "SMTP_PASS")
            .ok_or_else(|| MailerError::MissingEnvVar("EMAIL_PASS".to_string()))?;

        let from_address =
            env_either("EMAIL_FROM", "SMTP_FROM").unwrap_or_else(|| username.clone());

        Ok(Self {
            smtp_host,
            smtp_port,
            username,
            from_address,
            password: SecretString::from(password),
        })
    }

    /// Get the password (exposes the secret).
    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }

    /// Builder method to set the SMTP host.
    pub fn with_smtp_host(mut self, host: impl Into<String>) -> Self {
        self.smtp_host = host.into();
        self
    }

    /// Builder method to set the SMTP port.
    pub fn with_smtp_port(mut self, port: u16) -> Self {
        self.smtp_port = port;
        self
    }

    /// Builder method to set the sender address.
    pub fn with_from_address(mut self, from: impl Into<String>) -> Self {
        self.from_address = from.into();
        self
    }
}

/// Read the first of two environment variables that is set and non-empty.
fn env_either(primary: &str, secondary: &str) -> Option<String> {
    env::var(primary)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| env::var(secondary).ok().filter(|v| !v.trim().is_empty()))
}
