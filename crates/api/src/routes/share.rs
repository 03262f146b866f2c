//! Share routes: token issuance, recipient tracking, email delivery, and
//! the public read-only view.

use axum::extract::{Path, State};
use axum::Json;
use database::{recipient, summary, validate_email, Summary};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Recipient addresses for a share request: an array or a comma-separated
/// string.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum EmailsField {
    List(Vec<String>),
    Csv(String),
}

impl EmailsField {
    /// Flatten to trimmed, non-empty addresses.
    fn into_vec(self) -> Vec<String> {
        match self {
            EmailsField::List(list) => list
                .into_iter()
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .collect(),
            EmailsField::Csv(csv) => csv
                .split(',')
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }
}

/// Request to share a summary with one or more recipients.
#[derive(Deserialize)]
pub struct ShareRequest {
    pub emails: Option<EmailsField>,
}

/// Share outcome: the updated record plus per-recipient delivery results.
///
/// Delivery failures do not roll back the token or the recorded
/// recipients; sharing metadata and delivery are decoupled.
#[derive(Serialize)]
pub struct ShareResponse {
    pub message: &'static str,
    pub summary: Summary,
    /// Newly added recipients whose email went out (or was mocked).
    pub sent: Vec<String>,
    /// Addresses already recorded for this summary; not re-mailed.
    pub skipped: Vec<String>,
    /// Newly added recipients whose delivery failed.
    pub failed: Vec<String>,
}

/// Redacted public view of a shared summary.
///
/// Exposes the generated content only; the raw transcript is never
/// reachable through a share link.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedSummaryView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

/// Share a summary via email.
///
/// Validates every address up front (any invalid address rejects the whole
/// request), lazily issues the share token, records new recipients, and
/// mails only those new recipients.
pub async fn share_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ShareRequest>,
) -> Result<Json<ShareResponse>> {
    let emails: Vec<String> = req.emails.map(EmailsField::into_vec).unwrap_or_default();

    if emails.is_empty() {
        return Err(ApiError::Validation(
            "At least one email is required".to_string(),
        ));
    }

    let invalid: Vec<&str> = emails
        .iter()
        .filter(|email| validate_email(email).is_err())
        .map(String::as_str)
        .collect();
    if !invalid.is_empty() {
        return Err(ApiError::Validation(format!(
            "Invalid emails: {}",
            invalid.join(", ")
        )));
    }

    let pool = state.db.pool();
    let existing = summary::get_summary(pool, &id).await?;

    // Generate share token if not exists; once set it never changes
    if existing.share_token.is_none() {
        let token = Uuid::new_v4().simple().to_string();
        summary::set_share_token(pool, &id, &token).await?;
    }

    // De-duplicate; only new recipients are recorded and mailed
    let added = recipient::add_recipients(pool, &id, &emails).await?;
    if !added.is_empty() {
        summary::mark_shared(pool, &id).await?;
    }

    let updated = summary::get_summary(pool, &id).await?;
    let token = updated.share_token.clone().unwrap_or_default();
    let view_url = state.links.view_url(&token);

    let skipped: Vec<String> = emails
        .iter()
        .map(|email| database::normalize_email(email))
        .filter(|email| !added.contains(email))
        .collect();

    let mut sent = Vec::new();
    let mut failed = Vec::new();
    for email in &added {
        match state
            .mailer
            .send_summary(email, &updated.title, &updated.content, &view_url)
            .await
        {
            Ok(_) => {
                sent.push(email.clone());
            }
            Err(err) => {
                warn!(recipient = %email, error = %err, "Share email failed");
                failed.push(email.clone());
            }
        }
    }

    info!(
        id = %updated.id,
        sent = sent.len(),
        skipped = skipped.len(),
        failed = failed.len(),
        "Summary shared"
    );

    Ok(Json(ShareResponse {
        message: "Summary shared successfully",
        summary: updated,
        sent,
        skipped,
        failed,
    }))
}

/// Public read-only view of a shared summary.
pub async fn shared_summary(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<SharedSummaryView>> {
    let summary = summary::get_summary_by_token(state.db.pool(), &token).await?;

    Ok(Json(SharedSummaryView {
        id: summary.id,
        title: summary.title,
        content: summary.content,
        created_at: summary.created_at,
    }))
}
