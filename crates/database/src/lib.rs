//! SQLite persistence layer for Scribe.
//!
//! This crate provides async database operations for summary records and
//! their share recipients using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{models::NewSummary, summary, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:scribe.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Create a summary record
//!     let record = NewSummary {
//!         id: "c27fb365-0c84-4cf2-8555-814bb065e448".to_string(),
//!         title: "Weekly sync".to_string(),
//!         content: "## Summary\n- shipping slips a week".to_string(),
//!         original_transcript: "Alice: shipping slips a week...".to_string(),
//!         instruction: "Summarize clearly in concise bullet points.".to_string(),
//!     };
//!     summary::create_summary(db.pool(), &record).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod recipient;
pub mod summary;
pub mod validation;

pub use error::{DatabaseError, Result};
pub use models::{NewSummary, Recipient, Summary, SummaryUpdate};
pub use validation::{normalize_email, validate_email, ValidationError};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    /// Set high enough to serve concurrent API requests while summaries generate.
    const DEFAULT_POOL_SIZE: u32 = 20;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/scribe.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_summary_crud() {
        let db = test_db().await;

        // Create
        let record = NewSummary {
            id: "test-uuid-123".to_string(),
            title: "Standup".to_string(),
            content: "## Summary\n- all on track".to_string(),
            original_transcript: "PM: everything on track?".to_string(),
            instruction: "Summarize clearly in concise bullet points.".to_string(),
        };
        summary::create_summary(db.pool(), &record).await.unwrap();

        // Read
        let fetched = summary::get_summary(db.pool(), &record.id).await.unwrap();
        assert_eq!(fetched.title, "Standup");

        // Update
        let update = SummaryUpdate {
            title: None,
            content: Some("## Summary\n- edited".to_string()),
        };
        let fetched = summary::update_summary(db.pool(), &record.id, &update)
            .await
            .unwrap();
        assert_eq!(fetched.content, "## Summary\n- edited");

        // List
        let summaries = summary::list_summaries(db.pool()).await.unwrap();
        assert_eq!(summaries.len(), 1);

        // Delete
        summary::delete_summary(db.pool(), &record.id).await.unwrap();
        let result = summary::get_summary(db.pool(), &record.id).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_summary_serializes_camel_case() {
        let db = test_db().await;

        let record = NewSummary {
            id: "cc-1".to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            original_transcript: "o".to_string(),
            instruction: "i".to_string(),
        };
        let created = summary::create_summary(db.pool(), &record).await.unwrap();

        let json = serde_json::to_value(&created).unwrap();
        assert!(json.get("originalTranscript").is_some());
        assert!(json.get("shareToken").is_some());
        assert_eq!(json.get("isShared").unwrap(), &serde_json::json!(false));
        assert!(json.get("createdAt").is_some());
    }
}
