//! Repository for the singleton `about` row.

use sqlx::PgPool;

use crate::models::about::{About, UpsertAbout};

const COLUMNS: &str = "id, mission, vision, created_at, updated_at";

/// Reads and writes the single about-the-university record (`id = 1`).
pub struct AboutRepo;

impl AboutRepo {
    /// Fetch the record, or `None` before it has been written once.
    pub async fn get(pool: &PgPool) -> Result<Option<About>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about WHERE id = 1");
        sqlx::query_as::<_, About>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Create or replace the record.
    pub async fn upsert(pool: &PgPool, input: &UpsertAbout) -> Result<About, sqlx::Error> {
        let query = format!(
            "INSERT INTO about (id, mission, vision) VALUES (1, $1, $2) \
             ON CONFLICT (id) DO UPDATE SET \
                 mission = EXCLUDED.mission, \
                 vision = EXCLUDED.vision \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, About>(&query)
            .bind(&input.mission)
            .bind(&input.vision)
            .fetch_one(pool)
            .await
    }
}
