//! Academic calendar models and DTOs.

use cms_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `academic_calendar` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CalendarEntry {
    pub id: DbId,
    pub title: String,
    pub kind: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub description: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO shared by create and full-replace update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CalendarEntryInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub kind: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub description: Option<String>,
    pub status: Option<String>,
}
