//! Announcement models and DTOs.

use cms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `announcements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Announcement {
    pub id: DbId,
    pub headline: String,
    pub description: String,
    pub author_id: DbId,
    pub author_name: Option<String>,
    pub category: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an announcement.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAnnouncement {
    #[serde(default)]
    #[validate(length(min = 1, message = "headline is required"))]
    pub headline: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(required(message = "author_id is required"))]
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// DTO for replacing an announcement's editable fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAnnouncement {
    #[serde(default)]
    #[validate(length(min = 1, message = "headline is required"))]
    pub headline: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub category: Option<String>,
    pub status: Option<String>,
}
