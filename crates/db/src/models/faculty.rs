//! Faculty models and DTOs (built from multipart forms).

use cms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `faculties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Faculty {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_path: Option<String>,
    pub dean_name: Option<String>,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub established_year: Option<i32>,
    pub author_id: DbId,
    pub author_name: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateFaculty {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub dean_name: Option<String>,
    #[validate(email(message = "contact_email must be a valid email address"))]
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[validate(range(min = 1800, max = 2200, message = "established_year is out of range"))]
    pub established_year: Option<i32>,
    #[validate(required(message = "author_id is required"))]
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateFaculty {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub dean_name: Option<String>,
    #[validate(email(message = "contact_email must be a valid email address"))]
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[validate(range(min = 1800, max = 2200, message = "established_year is out of range"))]
    pub established_year: Option<i32>,
    pub status: Option<String>,
}
