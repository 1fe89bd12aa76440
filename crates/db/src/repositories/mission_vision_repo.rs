//! Repository for the `mission_vision` table.
//!
//! At most one row per `kind` may be `active`. Create, update and toggle each
//! run in one transaction that first takes a single transaction-scoped
//! advisory lock for the table, then deactivates the other rows of the kind
//! and writes the target. The lock exists even when a kind has no rows, and
//! there is only one of it, so writers queue instead of racing or
//! deadlocking. The partial unique index `uq_mission_vision_active_kind`
//! backs the invariant at the schema level.

use cms_core::status::{STATUS_ACTIVE, STATUS_INACTIVE};
use cms_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::mission_vision::{CreateMissionVision, MissionVision, UpdateMissionVision};

const COLUMNS: &str = "id, kind, content, author_name, status, created_at, updated_at";

/// Provides CRUD and single-active toggling for mission/vision statements.
pub struct MissionVisionRepo;

impl MissionVisionRepo {
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
    ) -> Result<Vec<MissionVision>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mission_vision \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY kind, created_at DESC, id DESC"
        );
        sqlx::query_as::<_, MissionVision>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MissionVision>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mission_vision WHERE id = $1");
        sqlx::query_as::<_, MissionVision>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a statement. When the resolved status is `active`, the other
    /// rows of the same kind are deactivated in the same transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMissionVision,
    ) -> Result<MissionVision, sqlx::Error> {
        let status = input.status.as_deref().unwrap_or(STATUS_INACTIVE);
        let mut tx = pool.begin().await?;
        lock_writers(&mut tx).await?;

        if status == STATUS_ACTIVE {
            deactivate_others(&mut tx, &input.kind, None).await?;
        }

        let query = format!(
            "INSERT INTO mission_vision (kind, content, author_name, status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MissionVision>(&query)
            .bind(&input.kind)
            .bind(&input.content)
            .bind(&input.author_name)
            .bind(status)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Replace a statement. Omitted `kind`/`status` keep their stored values.
    /// Returns `None` (and rolls back) if the row does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMissionVision,
    ) -> Result<Option<MissionVision>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        lock_writers(&mut tx).await?;

        let Some((current_kind, current_status)) = kind_and_status(&mut tx, id).await? else {
            return Ok(None);
        };
        let kind = input.kind.clone().unwrap_or(current_kind);
        let status = input.status.clone().unwrap_or(current_status);

        if status == STATUS_ACTIVE {
            deactivate_others(&mut tx, &kind, Some(id)).await?;
        }

        let query = format!(
            "UPDATE mission_vision SET kind = $2, content = $3, status = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MissionVision>(&query)
            .bind(id)
            .bind(&kind)
            .bind(&input.content)
            .bind(&status)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(row))
    }

    /// Make a statement the single active one of its kind, or deactivate it.
    ///
    /// Returns `None` (and rolls back) if the row does not exist.
    pub async fn toggle(
        pool: &PgPool,
        id: DbId,
        make_active: bool,
    ) -> Result<Option<MissionVision>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        lock_writers(&mut tx).await?;

        let Some((kind, _)) = kind_and_status(&mut tx, id).await? else {
            return Ok(None);
        };

        let target = if make_active {
            deactivate_others(&mut tx, &kind, Some(id)).await?;
            STATUS_ACTIVE
        } else {
            STATUS_INACTIVE
        };

        let query = format!(
            "UPDATE mission_vision SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MissionVision>(&query)
            .bind(id)
            .bind(target)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(row))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mission_vision WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Serialize mission/vision writers until the transaction ends.
async fn lock_writers(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT pg_advisory_xact_lock(hashtext('mission_vision'))")
        .execute(conn)
        .await?;
    Ok(())
}

/// The target's `(kind, status)`, or `None` if it does not exist.
async fn kind_and_status(
    conn: &mut PgConnection,
    id: DbId,
) -> Result<Option<(String, String)>, sqlx::Error> {
    sqlx::query_as("SELECT kind, status FROM mission_vision WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(conn)
        .await
}

async fn deactivate_others(
    conn: &mut PgConnection,
    kind: &str,
    except: Option<DbId>,
) -> Result<(), sqlx::Error> {
    let result = sqlx::query(
        "UPDATE mission_vision SET status = $2 \
         WHERE kind = $1 AND status = $3 AND ($4::bigint IS NULL OR id <> $4)",
    )
    .bind(kind)
    .bind(STATUS_INACTIVE)
    .bind(STATUS_ACTIVE)
    .bind(except)
    .execute(conn)
    .await?;

    if result.rows_affected() > 0 {
        tracing::debug!(kind, demoted = result.rows_affected(), "Deactivated previous statement");
    }
    Ok(())
}
