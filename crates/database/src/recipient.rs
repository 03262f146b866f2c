//! Share-recipient persistence.

use sqlx::SqlitePool;

use crate::models::Recipient;
use crate::validation::normalize_email;
use crate::Result;

/// List a summary's recipients in insertion order.
pub async fn list_recipients(pool: &SqlitePool, summary_id: &str) -> Result<Vec<Recipient>> {
    let recipients = sqlx::query_as::<_, Recipient>(
        r#"
        SELECT email, shared_at
        FROM recipients
        WHERE summary_id = ?
        ORDER BY rowid
        "#,
    )
    .bind(summary_id)
    .fetch_all(pool)
    .await?;

    Ok(recipients)
}

/// Record recipients for a summary, returning only the newly added ones.
///
/// Addresses are lowercased before storage; re-adding a known address is a
/// no-op. The returned list preserves the input order of the new addresses.
pub async fn add_recipients(
    pool: &SqlitePool,
    summary_id: &str,
    emails: &[String],
) -> Result<Vec<String>> {
    let mut added = Vec::new();

    for email in emails {
        let email = normalize_email(email);
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO recipients (summary_id, email)
            VALUES (?, ?)
            "#,
        )
        .bind(summary_id)
        .bind(&email)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            added.push(email);
        }
    }

    Ok(added)
}

/// Count recipients recorded for a summary.
pub async fn count_recipients(pool: &SqlitePool, summary_id: &str) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM recipients WHERE summary_id = ?
        "#,
    )
    .bind(summary_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewSummary;
    use crate::{summary, Database};

    async fn test_db_with_summary(id: &str) -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        summary::create_summary(
            db.pool(),
            &NewSummary {
                id: id.to_string(),
                title: "t".to_string(),
                content: "c".to_string(),
                original_transcript: "o".to_string(),
                instruction: "i".to_string(),
            },
        )
        .await
        .unwrap();
        db
    }

    #[tokio::test]
    async fn test_add_lowercases_and_dedupes() {
        let db = test_db_with_summary("s1").await;

        let added = add_recipients(
            db.pool(),
            "s1",
            &["Bob@Example.com".to_string(), "alice@example.com".to_string()],
        )
        .await
        .unwrap();
        assert_eq!(added, vec!["bob@example.com", "alice@example.com"]);

        // Re-sharing to a known address adds nothing
        let added = add_recipients(db.pool(), "s1", &["BOB@example.com".to_string()])
            .await
            .unwrap();
        assert!(added.is_empty());

        let recipients = list_recipients(db.pool(), "s1").await.unwrap();
        assert_eq!(recipients.len(), 2);
        assert_eq!(recipients[0].email, "bob@example.com");
        assert_eq!(recipients[1].email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_insertion_order_preserved() {
        let db = test_db_with_summary("s1").await;

        for email in ["c@x.com", "a@x.com", "b@x.com"] {
            add_recipients(db.pool(), "s1", &[email.to_string()])
                .await
                .unwrap();
        }

        let recipients = list_recipients(db.pool(), "s1").await.unwrap();
        let emails: Vec<&str> = recipients.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(emails, vec!["c@x.com", "a@x.com", "b@x.com"]);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_recipients() {
        let db = test_db_with_summary("s1").await;
        add_recipients(db.pool(), "s1", &["a@x.com".to_string()])
            .await
            .unwrap();

        summary::delete_summary(db.pool(), "s1").await.unwrap();
        assert_eq!(count_recipients(db.pool(), "s1").await.unwrap(), 0);
    }
}
