//! Repository for the `strategic_plan` table.

use cms_core::status::STATUS_ACTIVE;
use cms_core::types::DbId;
use sqlx::PgPool;

use crate::models::strategic_plan::{CreateStrategicPlan, StrategicPlan, UpdateStrategicPlan};

const COLUMNS: &str = "\
    id, title, slug, content, author_id, author_name, status, \
    created_at, updated_at";

/// Provides CRUD operations for strategic plan documents.
pub struct StrategicPlanRepo;

impl StrategicPlanRepo {
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
    ) -> Result<Vec<StrategicPlan>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM strategic_plan \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, StrategicPlan>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StrategicPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM strategic_plan WHERE id = $1");
        sqlx::query_as::<_, StrategicPlan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreateStrategicPlan,
        slug: Option<&str>,
    ) -> Result<StrategicPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO strategic_plan (title, slug, content, author_id, author_name, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StrategicPlan>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.content)
            .bind(input.author_id)
            .bind(&input.author_name)
            .bind(input.status.as_deref().unwrap_or(STATUS_ACTIVE))
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStrategicPlan,
        slug: Option<&str>,
    ) -> Result<Option<StrategicPlan>, sqlx::Error> {
        let query = format!(
            "UPDATE strategic_plan SET \
                 title = $2, \
                 slug = $3, \
                 content = $4, \
                 status = COALESCE($5, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StrategicPlan>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.content)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM strategic_plan WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
