/// An email message to send.
#[derive(Debug, Clone)]
pub struct Email {
    /// Recipient address
    pub to: String,
    /// Email subject
    pub subject: String,
    /// Plain text body
    pub body: String,
    /// Optional HTML body
    pub html_body: Option<String>,
}

impl Email {
    /// Create a new plain-text email.
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            html_body: None,
        }
    }

    /// Set the HTML body (creates multipart alternative with text fallback).
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html_body = Some(html.into());
        self
    }
}

/// Outcome of a delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Whether the message actually left over SMTP.
    pub delivered: bool,
    /// True when the mailer is disabled and the send was mocked.
    pub mock: bool,
}

impl DeliveryReceipt {
    /// Receipt for a real SMTP delivery.
    pub fn sent() -> Self {
        Self {
            delivered: true,
            mock: false,
        }
    }

    /// Receipt returned when the mailer is disabled.
    pub fn mocked() -> Self {
        Self {
            delivered: false,
            mock: true,
        }
    }
}
