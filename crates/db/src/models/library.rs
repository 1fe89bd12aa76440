//! Library catalogue models and DTOs (books and past papers).

use cms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `library_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LibraryItem {
    pub id: DbId,
    pub title: String,
    pub kind: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub year: Option<i32>,
    pub course: Option<String>,
    pub subject: Option<String>,
    pub faculty_id: Option<DbId>,
    pub faculty_name: Option<String>,
    pub level: String,
    pub description: Option<String>,
    pub file_path: Option<String>,
    pub created_by: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO shared by create and full-replace update; built from a multipart form.
#[derive(Debug, Clone, Validate)]
pub struct LibraryItemInput {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub kind: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    #[validate(range(min = 1000, max = 2200, message = "year is out of range"))]
    pub year: Option<i32>,
    pub course: Option<String>,
    pub subject: Option<String>,
    pub faculty_id: Option<DbId>,
    pub faculty_name: Option<String>,
    #[validate(length(min = 1, message = "level is required"))]
    pub level: String,
    pub description: Option<String>,
    pub created_by: Option<String>,
    pub status: Option<String>,
}
