//! Strategic plan models and DTOs.

use cms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `strategic_plan` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StrategicPlan {
    pub id: DbId,
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStrategicPlan {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStrategicPlan {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    pub status: Option<String>,
}
