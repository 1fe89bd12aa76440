//! Repository for the `academic_calendar` table.

use cms_core::status::STATUS_ACTIVE;
use cms_core::types::DbId;
use cms_core::vocab::DEFAULT_CALENDAR_KIND;
use sqlx::PgPool;

use crate::models::academic_calendar::{CalendarEntry, CalendarEntryInput};

const COLUMNS: &str = "\
    id, title, kind, start_date, end_date, description, status, \
    created_at, updated_at";

/// Provides CRUD operations for academic calendar entries.
pub struct AcademicCalendarRepo;

impl AcademicCalendarRepo {
    /// List entries chronologically; undated entries come last.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
    ) -> Result<Vec<CalendarEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM academic_calendar \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY start_date NULLS LAST, id"
        );
        sqlx::query_as::<_, CalendarEntry>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CalendarEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM academic_calendar WHERE id = $1");
        sqlx::query_as::<_, CalendarEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CalendarEntryInput,
    ) -> Result<CalendarEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO academic_calendar \
                 (title, kind, start_date, end_date, description, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CalendarEntry>(&query)
            .bind(&input.title)
            .bind(input.kind.as_deref().unwrap_or(DEFAULT_CALENDAR_KIND))
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.description)
            .bind(input.status.as_deref().unwrap_or(STATUS_ACTIVE))
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CalendarEntryInput,
    ) -> Result<Option<CalendarEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE academic_calendar SET \
                 title = $2, \
                 kind = COALESCE($3, kind), \
                 start_date = $4, \
                 end_date = $5, \
                 description = $6, \
                 status = COALESCE($7, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CalendarEntry>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.kind)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.description)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM academic_calendar WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
