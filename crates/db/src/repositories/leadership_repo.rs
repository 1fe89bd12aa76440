//! Repository for the `leadership` table.

use cms_core::status::STATUS_INACTIVE;
use cms_core::types::DbId;
use cms_core::vocab::DEFAULT_LEADERSHIP_KIND;
use sqlx::PgPool;

use crate::models::leadership::{CreateLeader, Leader, UpdateLeader};

const COLUMNS: &str = "\
    id, name, title, kind, description, image_path, location, author_id, \
    author_name, status, created_at, updated_at";

/// Provides CRUD operations for leaders and directorates.
pub struct LeadershipRepo;

impl LeadershipRepo {
    /// List entries grouped by kind, in insertion order within a kind.
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Leader>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM leadership \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY kind, id"
        );
        sqlx::query_as::<_, Leader>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Leader>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leadership WHERE id = $1");
        sqlx::query_as::<_, Leader>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreateLeader,
        image_path: Option<&str>,
    ) -> Result<Leader, sqlx::Error> {
        let query = format!(
            "INSERT INTO leadership \
                 (name, title, kind, description, image_path, location, \
                  author_id, author_name, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Leader>(&query)
            .bind(&input.name)
            .bind(&input.title)
            .bind(input.kind.as_deref().unwrap_or(DEFAULT_LEADERSHIP_KIND))
            .bind(&input.description)
            .bind(image_path)
            .bind(&input.location)
            .bind(input.author_id)
            .bind(&input.author_name)
            .bind(input.status.as_deref().unwrap_or(STATUS_INACTIVE))
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLeader,
        image_path: Option<&str>,
    ) -> Result<Option<Leader>, sqlx::Error> {
        let query = format!(
            "UPDATE leadership SET \
                 name = $2, \
                 title = $3, \
                 kind = COALESCE($4, kind), \
                 description = $5, \
                 image_path = COALESCE($6, image_path), \
                 location = $7, \
                 status = COALESCE($8, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Leader>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.title)
            .bind(&input.kind)
            .bind(&input.description)
            .bind(image_path)
            .bind(&input.location)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Option<String>>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>(
            "DELETE FROM leadership WHERE id = $1 RETURNING image_path",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
