use lettre::{
    message::{MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{info, instrument, warn};

use crate::render;
use crate::types::{DeliveryReceipt, Email};
use crate::{MailerConfig, MailerError};

/// Client for sending shared summaries over SMTP.
///
/// Uses connection pooling for efficient batch sending. A mailer built
/// without credentials is disabled: sends are skipped and answered with a
/// mock receipt so share flows keep working without real configuration.
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from_address: String,
}

impl Mailer {
    /// Create a new mailer with the given configuration.
    ///
    /// Port 465 selects an implicit-TLS relay; any other port STARTTLS.
    pub fn new(config: MailerConfig) -> Result<Self, MailerError> {
        let creds = Credentials::new(config.username.clone(), config.password().to_string());

        let builder = if config.smtp_port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        };

        let transport = builder
            .map_err(|e| MailerError::Transport(e.to_string()))?
            .port(config.smtp_port)
            .credentials(creds)
            .build();

        info!(
            host = %config.smtp_host,
            port = config.smtp_port,
            username = %config.username,
            "Created SMTP mailer"
        );

        Ok(Self {
            transport: Some(transport),
            from_address: config.from_address,
        })
    }

    /// Create a disabled mailer that mocks every delivery.
    pub fn disabled() -> Self {
        Self {
            transport: None,
            from_address: String::new(),
        }
    }

    /// Whether a real SMTP transport is configured.
    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }

    /// Send a shared summary to one recipient.
    ///
    /// The message body is the summary content plus the public view link,
    /// nothing else.
    #[instrument(skip(self, summary_markdown), fields(to = %to, title = %title))]
    pub async fn send_summary(
        &self,
        to: &str,
        title: &str,
        summary_markdown: &str,
        view_url: &str,
    ) -> Result<DeliveryReceipt, MailerError> {
        let Some(transport) = &self.transport else {
            warn!("Mailer disabled - delivery mocked");
            return Ok(DeliveryReceipt::mocked());
        };

        let email = render::summary_email(to, title, summary_markdown, view_url);
        let message = self.build_message(&email)?;

        transport
            .send(message)
            .await
            .map_err(|e| MailerError::Send(e.to_string()))?;

        info!("Email sent successfully");
        Ok(DeliveryReceipt::sent())
    }

    /// Build a lettre Message from our Email type.
    fn build_message(&self, email: &Email) -> Result<Message, MailerError> {
        let from = self
            .from_address
            .parse()
            .map_err(|e| MailerError::InvalidAddress(format!("From: {}", e)))?;

        let to = email
            .to
            .parse()
            .map_err(|e| MailerError::InvalidAddress(format!("To '{}': {}", email.to, e)))?;

        let builder = Message::builder().from(from).to(to).subject(&email.subject);

        let message = if let Some(html) = &email.html_body {
            // Multipart alternative: text + HTML
            builder
                .multipart(
                    MultiPart::alternative()
                        .singlepart(SinglePart::plain(email.body.clone()))
                        .singlepart(SinglePart::html(html.clone())),
                )
                .map_err(|e| MailerError::BuildEmail(e.to_string()))?
        } else {
            // Plain text only
            builder
                .body(email.body.clone())
                .map_err(|e| MailerError::BuildEmail(e.to_string()))?
        };

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_mailer_mocks_delivery() {
        let mailer = Mailer::disabled();
        assert!(!mailer.is_enabled());

        let receipt = mailer
            .send_summary("to@x.com", "Title", "## Summary\n- a", "https://x/shared/t")
            .await
            .unwrap();

        assert!(receipt.mock);
        assert!(!receipt.delivered);
    }

    #[tokio::test]
    async fn test_enabled_mailer_reports_enabled() {
        let config = MailerConfig::new("smtp.example.com", 465, "u@example.com", "pw");
        let mailer = Mailer::new(config).unwrap();
        assert!(mailer.is_enabled());
    }

    #[tokio::test]
    async fn test_build_message_rejects_bad_recipient() {
        let config = MailerConfig::new("smtp.example.com", 465, "u@example.com", "pw");
        let mailer = Mailer::new(config).unwrap();

        let email = Email::new("not-an-address", "s", "b");
        let result = mailer.build_message(&email);
        assert!(matches!(result, Err(MailerError::InvalidAddress(_))));
    }

    #[tokio::test]
    async fn test_build_message_multipart() {
        let config = MailerConfig::new("smtp.example.com", 465, "u@example.com", "pw");
        let mailer = Mailer::new(config).unwrap();

        let email = Email::new("to@example.com", "s", "plain").with_html("<p>rich</p>");
        let message = mailer.build_message(&email).unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("multipart/alternative"));
    }
}
