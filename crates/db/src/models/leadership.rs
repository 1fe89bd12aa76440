//! Leadership / directorate models and DTOs (built from multipart forms).

use cms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `leadership` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Leader {
    pub id: DbId,
    pub name: String,
    pub title: Option<String>,
    pub kind: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub location: Option<String>,
    pub author_id: DbId,
    pub author_name: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateLeader {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub title: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[validate(required(message = "author_id is required"))]
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateLeader {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub title: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
}
