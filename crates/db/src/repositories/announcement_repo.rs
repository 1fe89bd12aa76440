//! Repository for the `announcements` table.

use cms_core::status::STATUS_ACTIVE;
use cms_core::types::DbId;
use cms_core::vocab::DEFAULT_ANNOUNCEMENT_CATEGORY;
use sqlx::PgPool;

use crate::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};

const COLUMNS: &str = "\
    id, headline, description, author_id, author_name, category, status, \
    created_at, updated_at";

/// Provides CRUD operations for announcements.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    /// List announcements, newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
    ) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM announcements \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements WHERE id = $1");
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an announcement. Category defaults to `General` and status to
    /// `active`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAnnouncement,
    ) -> Result<Announcement, sqlx::Error> {
        let query = format!(
            "INSERT INTO announcements \
                 (headline, description, author_id, author_name, category, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(&input.headline)
            .bind(&input.description)
            .bind(input.author_id)
            .bind(&input.author_name)
            .bind(
                input
                    .category
                    .as_deref()
                    .unwrap_or(DEFAULT_ANNOUNCEMENT_CATEGORY),
            )
            .bind(input.status.as_deref().unwrap_or(STATUS_ACTIVE))
            .fetch_one(pool)
            .await
    }

    /// Replace the editable fields. Omitted category/status keep their
    /// stored values.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAnnouncement,
    ) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!(
            "UPDATE announcements SET \
                 headline = $2, \
                 description = $3, \
                 category = COALESCE($4, category), \
                 status = COALESCE($5, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .bind(&input.headline)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an announcement. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
