//! Repository for the `history` table.

use cms_core::status::STATUS_INACTIVE;
use cms_core::types::DbId;
use sqlx::PgPool;

use crate::models::history::{CreateHistoryEntry, HistoryEntry, UpdateHistoryEntry};

const COLUMNS: &str = "\
    id, year, title, description, author_name, status, created_at, updated_at";

/// Provides CRUD operations for history timeline entries.
pub struct HistoryRepo;

impl HistoryRepo {
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
    ) -> Result<Vec<HistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM history \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY year, id"
        );
        sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HistoryEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM history WHERE id = $1");
        sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreateHistoryEntry,
    ) -> Result<HistoryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO history (year, title, description, author_name, status) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(&input.year)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.author_name)
            .bind(input.status.as_deref().unwrap_or(STATUS_INACTIVE))
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHistoryEntry,
    ) -> Result<Option<HistoryEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE history SET \
                 year = $2, \
                 title = $3, \
                 description = $4, \
                 status = COALESCE($5, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(id)
            .bind(&input.year)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Set one entry's status without touching the others. Any number of
    /// history entries may be active at once.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<HistoryEntry>, sqlx::Error> {
        let query = format!("UPDATE history SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM history WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
