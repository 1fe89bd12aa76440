//! Academic programme models and DTOs.

use cms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `programmes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Programme {
    pub id: DbId,
    pub code: String,
    pub title: String,
    pub level: String,
    pub faculty_id: Option<DbId>,
    pub faculty_name: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProgramme {
    #[serde(default)]
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub level: Option<String>,
    pub faculty_id: Option<DbId>,
    pub faculty_name: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProgramme {
    #[serde(default)]
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub level: Option<String>,
    pub faculty_id: Option<DbId>,
    pub faculty_name: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}
