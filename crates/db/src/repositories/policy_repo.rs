//! Repository for the `policies` table.

use cms_core::status::STATUS_INACTIVE;
use cms_core::types::DbId;
use sqlx::PgPool;

use crate::models::policy::{CreatePolicy, Policy, UpdatePolicy};

const COLUMNS: &str = "\
    id, title, slug, content, author_id, author_name, status, \
    created_at, updated_at";

/// Provides CRUD operations for policies.
///
/// The slug is resolved by the caller (explicit value or derived from the
/// title) and passed separately; `uq_policies_slug` rejects duplicates.
pub struct PolicyRepo;

impl PolicyRepo {
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Policy>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM policies \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY title, id"
        );
        sqlx::query_as::<_, Policy>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Policy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM policies WHERE id = $1");
        sqlx::query_as::<_, Policy>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreatePolicy,
        slug: &str,
    ) -> Result<Policy, sqlx::Error> {
        let query = format!(
            "INSERT INTO policies (title, slug, content, author_id, author_name, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Policy>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.content)
            .bind(input.author_id)
            .bind(&input.author_name)
            .bind(input.status.as_deref().unwrap_or(STATUS_INACTIVE))
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePolicy,
        slug: &str,
    ) -> Result<Option<Policy>, sqlx::Error> {
        let query = format!(
            "UPDATE policies SET \
                 title = $2, \
                 slug = $3, \
                 content = $4, \
                 status = COALESCE($5, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Policy>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.content)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM policies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
