//! Affiliate / partner models and DTOs (built from multipart forms).

use cms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `affiliates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Affiliate {
    pub id: DbId,
    pub name: String,
    pub kind: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub author_id: DbId,
    pub author_name: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateAffiliate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub kind: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "website must be a valid URL"))]
    pub website: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(required(message = "author_id is required"))]
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateAffiliate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub kind: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "website must be a valid URL"))]
    pub website: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    pub status: Option<String>,
}
