//! Mission / vision statement models and DTOs.
//!
//! Several statements of each kind may exist, but at most one per kind is
//! `active` at a time.

use cms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `mission_vision` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MissionVision {
    pub id: DbId,
    pub kind: String,
    pub content: String,
    pub author_name: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMissionVision {
    #[serde(default)]
    #[validate(length(min = 1, message = "kind is required"))]
    pub kind: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    pub author_name: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMissionVision {
    pub kind: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    pub status: Option<String>,
}
