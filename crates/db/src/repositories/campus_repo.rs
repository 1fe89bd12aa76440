//! Repository for the `campuses` table.

use cms_core::status::STATUS_INACTIVE;
use cms_core::types::DbId;
use sqlx::PgPool;

use crate::models::campus::{Campus, CreateCampus, UpdateCampus};

const COLUMNS: &str = "\
    id, name, description, image_path, location, author_id, author_name, \
    status, created_at, updated_at";

/// Provides CRUD operations for campuses.
pub struct CampusRepo;

impl CampusRepo {
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Campus>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM campuses \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Campus>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campuses WHERE id = $1");
        sqlx::query_as::<_, Campus>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a campus. New campuses start `inactive` unless told otherwise.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCampus,
        image_path: Option<&str>,
    ) -> Result<Campus, sqlx::Error> {
        let query = format!(
            "INSERT INTO campuses \
                 (name, description, image_path, location, author_id, author_name, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campus>(&query)
            .bind(&input.name)
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
        input: &UpdateCampus,
        image_path: Option<&str>,
    ) -> Result<Option<Campus>, sqlx::Error> {
        let query = format!(
            "UPDATE campuses SET \
                 name = $2, \
                 description = $3, \
                 image_path = COALESCE($4, image_path), \
                 location = $5, \
                 status = COALESCE($6, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campus>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(image_path)
            .bind(&input.location)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Option<String>>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>(
            "DELETE FROM campuses WHERE id = $1 RETURNING image_path",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
