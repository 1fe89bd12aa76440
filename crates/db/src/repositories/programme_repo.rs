//! Repository for the `programmes` table.

use cms_core::status::STATUS_ACTIVE;
use cms_core::types::DbId;
use cms_core::vocab::DEFAULT_PROGRAMME_LEVEL;
use sqlx::PgPool;

use crate::models::programme::{CreateProgramme, Programme, UpdateProgramme};

const COLUMNS: &str = "\
    id, code, title, level, faculty_id, faculty_name, duration, description, \
    author_id, author_name, status, created_at, updated_at";

/// Provides CRUD operations for academic programmes.
pub struct ProgrammeRepo;

impl ProgrammeRepo {
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Programme>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM programmes \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY title, id"
        );
        sqlx::query_as::<_, Programme>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Programme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM programmes WHERE id = $1");
        sqlx::query_as::<_, Programme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateProgramme) -> Result<Programme, sqlx::Error> {
        let query = format!(
            "INSERT INTO programmes \
                 (code, title, level, faculty_id, faculty_name, duration, description, \
                  author_id, author_name, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Programme>(&query)
            .bind(&input.code)
            .bind(&input.title)
            .bind(input.level.as_deref().unwrap_or(DEFAULT_PROGRAMME_LEVEL))
            .bind(input.faculty_id)
            .bind(&input.faculty_name)
            .bind(&input.duration)
            .bind(&input.description)
            .bind(input.author_id)
            .bind(&input.author_name)
            .bind(input.status.as_deref().unwrap_or(STATUS_ACTIVE))
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProgramme,
    ) -> Result<Option<Programme>, sqlx::Error> {
        let query = format!(
            "UPDATE programmes SET \
                 code = $2, \
                 title = $3, \
                 level = COALESCE($4, level), \
                 faculty_id = $5, \
                 faculty_name = $6, \
                 duration = $7, \
                 description = $8, \
                 status = COALESCE($9, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Programme>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(&input.title)
            .bind(&input.level)
            .bind(input.faculty_id)
            .bind(&input.faculty_name)
            .bind(&input.duration)
            .bind(&input.description)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM programmes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
