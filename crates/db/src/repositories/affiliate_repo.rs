//! Repository for the `affiliates` table.

use cms_core::status::STATUS_INACTIVE;
use cms_core::types::DbId;
use cms_core::vocab::DEFAULT_AFFILIATE_KIND;
use sqlx::PgPool;

use crate::models::affiliate::{Affiliate, CreateAffiliate, UpdateAffiliate};

const COLUMNS: &str = "\
    id, name, kind, description, image_path, website, email, author_id, \
    author_name, status, created_at, updated_at";

/// Provides CRUD operations for affiliates and partners.
pub struct AffiliateRepo;

impl AffiliateRepo {
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Affiliate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM affiliates \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Affiliate>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Affiliate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM affiliates WHERE id = $1");
        sqlx::query_as::<_, Affiliate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreateAffiliate,
        image_path: Option<&str>,
    ) -> Result<Affiliate, sqlx::Error> {
        let query = format!(
            "INSERT INTO affiliates \
                 (name, kind, description, image_path, website, email, \
                  author_id, author_name, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Affiliate>(&query)
            .bind(&input.name)
            .bind(input.kind.as_deref().unwrap_or(DEFAULT_AFFILIATE_KIND))
            .bind(&input.description)
            .bind(image_path)
            .bind(&input.website)
            .bind(&input.email)
            .bind(input.author_id)
            .bind(&input.author_name)
            .bind(input.status.as_deref().unwrap_or(STATUS_INACTIVE))
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAffiliate,
        image_path: Option<&str>,
    ) -> Result<Option<Affiliate>, sqlx::Error> {
        let query = format!(
            "UPDATE affiliates SET \
                 name = $2, \
                 kind = COALESCE($3, kind), \
                 description = $4, \
                 image_path = COALESCE($5, image_path), \
                 website = $6, \
                 email = $7, \
                 status = COALESCE($8, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Affiliate>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.description)
            .bind(image_path)
            .bind(&input.website)
            .bind(&input.email)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Option<String>>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>(
            "DELETE FROM affiliates WHERE id = $1 RETURNING image_path",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
