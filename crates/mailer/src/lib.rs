//! SMTP delivery of shared summaries.
//!
//! Wraps an async SMTP transport behind an on/off capability: with
//! credentials configured the mailer sends real multipart (plain + HTML)
//! mail; without them it returns mock success receipts so share flows stay
//! testable. The payload is always the summary content plus a public view
//! link; the raw transcript is never mailed.

mod client;
mod config;
mod error;
mod render;
mod types;

pub use client::Mailer;
pub use config::MailerConfig;
pub use error::MailerError;
pub use render::markdown_to_html;
pub use types::{DeliveryReceipt, Email};
