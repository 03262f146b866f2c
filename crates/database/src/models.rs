//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored summary record.
///
/// `content` is the pipeline output and the only text ever exposed through
/// shares or email; the raw transcript is stored alongside it but never
/// echoed externally. Fields serialize in camelCase, the record's external
/// wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Unique identifier, assigned at creation.
    pub id: String,
    /// Display title.
    pub title: String,
    /// The generated summary text.
    pub content: String,
    /// Raw transcript the summary was generated from.
    pub original_transcript: String,
    /// Instruction that steered the summarizer.
    pub instruction: String,
    /// Opaque public-access token; absent until the first share.
    pub share_token: Option<String>,
    /// True once any recipient has been recorded.
    pub is_shared: bool,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// Fields for creating a new summary record.
#[derive(Debug, Clone)]
pub struct NewSummary {
    /// Unique identifier for the new record.
    pub id: String,
    /// Display title.
    pub title: String,
    /// The generated summary text.
    pub content: String,
    /// Raw transcript.
    pub original_transcript: String,
    /// Instruction that steered the summarizer.
    pub instruction: String,
}

/// Partial update for a summary record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryUpdate {
    /// New title, if changing.
    pub title: Option<String>,
    /// New content, if changing.
    pub content: Option<String>,
}

impl SummaryUpdate {
    /// True when no field is being changed.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// A recorded share recipient for a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    /// Lowercased email address.
    pub email: String,
    /// When the share was recorded.
    pub shared_at: String,
}
