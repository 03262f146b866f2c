//! Summary CRUD operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{NewSummary, Summary, SummaryUpdate};

/// Create a new summary record and return it with its timestamps.
pub async fn create_summary(pool: &SqlitePool, new: &NewSummary) -> Result<Summary> {
    sqlx::query(
        r#"
        INSERT INTO summaries (id, title, content, original_transcript, instruction)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new.id)
    .bind(&new.title)
    .bind(&new.content)
    .bind(&new.original_transcript)
    .bind(&new.instruction)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Summary",
                    id: new.id.clone(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    get_summary(pool, &new.id).await
}

/// Get a summary by ID.
pub async fn get_summary(pool: &SqlitePool, id: &str) -> Result<Summary> {
    sqlx::query_as::<_, Summary>(
        r#"
        SELECT id, title, content, original_transcript, instruction,
               share_token, is_shared, created_at, updated_at
        FROM summaries
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Summary",
        id: id.to_string(),
    })
}

/// Get a summary by its share token.
pub async fn get_summary_by_token(pool: &SqlitePool, token: &str) -> Result<Summary> {
    sqlx::query_as::<_, Summary>(
        r#"
        SELECT id, title, content, original_transcript, instruction,
               share_token, is_shared, created_at, updated_at
        FROM summaries
        WHERE share_token = ?
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Summary",
        id: token.to_string(),
    })
}

/// Apply a partial update (title and/or content) and return the new state.
pub async fn update_summary(
    pool: &SqlitePool,
    id: &str,
    update: &SummaryUpdate,
) -> Result<Summary> {
    let result = sqlx::query(
        r#"
        UPDATE summaries
        SET title = COALESCE(?, title),
            content = COALESCE(?, content),
            updated_at = datetime('now')
        WHERE id = ?
        "#,
    )
    .bind(update.title.as_deref())
    .bind(update.content.as_deref())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Summary",
            id: id.to_string(),
        });
    }

    get_summary(pool, id).await
}

/// Delete a summary by ID.
pub async fn delete_summary(pool: &SqlitePool, id: &str) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM summaries
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Summary",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// List all summaries, newest first.
pub async fn list_summaries(pool: &SqlitePool) -> Result<Vec<Summary>> {
    let summaries = sqlx::query_as::<_, Summary>(
        r#"
        SELECT id, title, content, original_transcript, instruction,
               share_token, is_shared, created_at, updated_at
        FROM summaries
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(summaries)
}

/// Count total summaries.
pub async fn count_summaries(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM summaries
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Set the share token if the record does not have one yet.
///
/// A token already present is left untouched: once issued it is stable for
/// the record's lifetime.
pub async fn set_share_token(pool: &SqlitePool, id: &str, token: &str) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE summaries
        SET share_token = ?, updated_at = datetime('now')
        WHERE id = ? AND share_token IS NULL
        "#,
    )
    .bind(token)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Mark a summary as shared.
pub async fn mark_shared(pool: &SqlitePool, id: &str) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE summaries
        SET is_shared = 1, updated_at = datetime('now')
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
