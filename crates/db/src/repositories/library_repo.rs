//! Repository for the `library_items` table.

use cms_core::status::STATUS_ACTIVE;
use cms_core::types::DbId;
use cms_core::vocab::DEFAULT_LIBRARY_KIND;
use sqlx::PgPool;

use crate::models::library::{LibraryItem, LibraryItemInput};

const COLUMNS: &str = "\
    id, title, kind, author, isbn, year, course, subject, faculty_id, \
    faculty_name, level, description, file_path, created_by, status, \
    created_at, updated_at";

/// Provides CRUD operations for library books and past papers.
pub struct LibraryRepo;

impl LibraryRepo {
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<LibraryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM library_items \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, LibraryItem>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LibraryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM library_items WHERE id = $1");
        sqlx::query_as::<_, LibraryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &LibraryItemInput,
        file_path: Option<&str>,
    ) -> Result<LibraryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO library_items \
                 (title, kind, author, isbn, year, course, subject, faculty_id, \
                  faculty_name, level, description, file_path, created_by, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LibraryItem>(&query)
            .bind(&input.title)
            .bind(input.kind.as_deref().unwrap_or(DEFAULT_LIBRARY_KIND))
            .bind(&input.author)
            .bind(&input.isbn)
            .bind(input.year)
            .bind(&input.course)
            .bind(&input.subject)
            .bind(input.faculty_id)
            .bind(&input.faculty_name)
            .bind(&input.level)
            .bind(&input.description)
            .bind(file_path)
            .bind(&input.created_by)
            .bind(input.status.as_deref().unwrap_or(STATUS_ACTIVE))
            .fetch_one(pool)
            .await
    }

    /// Replace the editable fields. `file_path = None` keeps the stored
    /// document.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &LibraryItemInput,
        file_path: Option<&str>,
    ) -> Result<Option<LibraryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE library_items SET \
                 title = $2, \
                 kind = COALESCE($3, kind), \
                 author = $4, \
                 isbn = $5, \
                 year = $6, \
                 course = $7, \
                 subject = $8, \
                 faculty_id = $9, \
                 faculty_name = $10, \
                 level = $11, \
                 description = $12, \
                 file_path = COALESCE($13, file_path), \
                 status = COALESCE($14, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LibraryItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.kind)
            .bind(&input.author)
            .bind(&input.isbn)
            .bind(input.year)
            .bind(&input.course)
            .bind(&input.subject)
            .bind(input.faculty_id)
            .bind(&input.faculty_name)
            .bind(&input.level)
            .bind(&input.description)
            .bind(file_path)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item, returning its document path.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Option<String>>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>(
            "DELETE FROM library_items WHERE id = $1 RETURNING file_path",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
