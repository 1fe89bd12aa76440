//! Repository for the `news_events` table.

use cms_core::status::STATUS_ACTIVE;
use cms_core::types::DbId;
use cms_core::vocab::DEFAULT_NEWS_EVENT_KIND;
use sqlx::PgPool;

use crate::models::news_event::{CreateNewsEvent, NewsEvent, UpdateNewsEvent};

const COLUMNS: &str = "\
    id, headline, description, image_path, event_time, location, kind, \
    author_id, author_name, status, created_at, updated_at";

/// Provides CRUD operations for news items and events.
pub struct NewsEventRepo;

impl NewsEventRepo {
    /// List items by event time (undated last), then newest first.
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<NewsEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM news_events \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY event_time DESC NULLS LAST, created_at DESC, id DESC"
        );
        sqlx::query_as::<_, NewsEvent>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<NewsEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news_events WHERE id = $1");
        sqlx::query_as::<_, NewsEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreateNewsEvent,
        image_path: Option<&str>,
    ) -> Result<NewsEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO news_events \
                 (headline, description, image_path, event_time, location, kind, \
                  author_id, author_name, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsEvent>(&query)
            .bind(&input.headline)
            .bind(&input.description)
            .bind(image_path)
            .bind(input.event_time)
            .bind(&input.location)
            .bind(input.kind.as_deref().unwrap_or(DEFAULT_NEWS_EVENT_KIND))
            .bind(input.author_id)
            .bind(&input.author_name)
            .bind(input.status.as_deref().unwrap_or(STATUS_ACTIVE))
            .fetch_one(pool)
            .await
    }

    /// Replace the editable fields. `image_path = None` keeps the stored
    /// image.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNewsEvent,
        image_path: Option<&str>,
    ) -> Result<Option<NewsEvent>, sqlx::Error> {
        let query = format!(
            "UPDATE news_events SET \
                 headline = $2, \
                 description = $3, \
                 image_path = COALESCE($4, image_path), \
                 event_time = $5, \
                 location = $6, \
                 kind = COALESCE($7, kind), \
                 status = COALESCE($8, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsEvent>(&query)
            .bind(id)
            .bind(&input.headline)
            .bind(&input.description)
            .bind(image_path)
            .bind(input.event_time)
            .bind(&input.location)
            .bind(&input.kind)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item, returning its image path.
    ///
    /// The outer `Option` is `None` when no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Option<String>>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>(
            "DELETE FROM news_events WHERE id = $1 RETURNING image_path",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
