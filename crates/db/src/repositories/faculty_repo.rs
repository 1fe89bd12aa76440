//! Repository for the `faculties` table.

use cms_core::status::STATUS_ACTIVE;
use cms_core::types::DbId;
use sqlx::PgPool;

use crate::models::faculty::{CreateFaculty, Faculty, UpdateFaculty};

const COLUMNS: &str = "\
    id, name, description, image_path, dean_name, contact_email, phone, \
    location, established_year, author_id, author_name, status, \
    created_at, updated_at";

/// Provides CRUD operations for faculties.
pub struct FacultyRepo;

impl FacultyRepo {
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Faculty>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM faculties \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Faculty>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faculty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faculties WHERE id = $1");
        sqlx::query_as::<_, Faculty>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreateFaculty,
        image_path: Option<&str>,
    ) -> Result<Faculty, sqlx::Error> {
        let query = format!(
            "INSERT INTO faculties \
                 (name, description, image_path, dean_name, contact_email, phone, \
                  location, established_year, author_id, author_name, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faculty>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(image_path)
            .bind(&input.dean_name)
            .bind(&input.contact_email)
            .bind(&input.phone)
            .bind(&input.location)
            .bind(input.established_year)
            .bind(input.author_id)
            .bind(&input.author_name)
            .bind(input.status.as_deref().unwrap_or(STATUS_ACTIVE))
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaculty,
        image_path: Option<&str>,
    ) -> Result<Option<Faculty>, sqlx::Error> {
        let query = format!(
            "UPDATE faculties SET \
                 name = $2, \
                 description = $3, \
                 image_path = COALESCE($4, image_path), \
                 dean_name = $5, \
                 contact_email = $6, \
                 phone = $7, \
                 location = $8, \
                 established_year = $9, \
                 status = COALESCE($10, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faculty>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(image_path)
            .bind(&input.dean_name)
            .bind(&input.contact_email)
            .bind(&input.phone)
            .bind(&input.location)
            .bind(input.established_year)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a faculty, returning its image path. Library items and
    /// programmes that referenced it keep their rows with `faculty_id`
    /// cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Option<String>>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>(
            "DELETE FROM faculties WHERE id = $1 RETURNING image_path",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
