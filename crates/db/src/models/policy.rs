//! Policy document models and DTOs.

use cms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `policies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Policy {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub content: Option<String>,
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a policy. A blank `slug` is derived from `title`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePolicy {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePolicy {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
}
