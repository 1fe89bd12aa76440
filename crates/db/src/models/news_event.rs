//! News/event models and DTOs.
//!
//! These rows are created from multipart forms, so the DTOs are built by the
//! API layer rather than deserialized directly.

use cms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `news_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsEvent {
    pub id: DbId,
    pub headline: String,
    pub description: String,
    pub image_path: Option<String>,
    pub event_time: Option<Timestamp>,
    pub location: Option<String>,
    pub kind: String,
    pub author_id: DbId,
    pub author_name: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateNewsEvent {
    #[validate(length(min = 1, message = "headline is required"))]
    pub headline: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub event_time: Option<Timestamp>,
    pub location: Option<String>,
    pub kind: Option<String>,
    #[validate(required(message = "author_id is required"))]
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateNewsEvent {
    #[validate(length(min = 1, message = "headline is required"))]
    pub headline: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub event_time: Option<Timestamp>,
    pub location: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
}
