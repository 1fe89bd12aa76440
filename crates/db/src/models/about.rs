//! The singleton "about" record (institution-wide mission and vision text).

use cms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The only row of the `about` table (`id = 1`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct About {
    pub id: DbId,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `PUT /about`. Both fields are replaced.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertAbout {
    pub mission: Option<String>,
    pub vision: Option<String>,
}
