//! Staff models and DTOs.
//!
//! [`StaffCredentials`] is the only struct that carries the password hash;
//! everything serialized to clients goes through [`Staff`].

use cms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Public profile of a `staff` row (no credentials).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Staff {
    pub id: DbId,
    pub staff_id: String,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub role: String,
    pub office_location: Option<String>,
    pub bio: Option<String>,
    pub profile_photo: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Login-relevant columns of a `staff` row.
#[derive(Debug, Clone, FromRow)]
pub struct StaffCredentials {
    pub id: DbId,
    pub password_hash: String,
    pub status: String,
}

/// DTO for creating a staff member. `password` is plaintext here and is
/// hashed by the API layer before it reaches the repository.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStaff {
    #[serde(default)]
    #[validate(length(min = 1, message = "staff_id is required"))]
    pub staff_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub office_location: Option<String>,
}

/// DTO for replacing a staff member's profile fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStaff {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub office_location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
}

/// Body of `POST /staff/{id}/change-password`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePassword {
    #[serde(default)]
    #[validate(length(min = 1, message = "current_password is required"))]
    pub current_password: String,
    #[serde(default)]
    #[validate(length(min = 8, message = "new_password must be at least 8 characters"))]
    pub new_password: String,
}
