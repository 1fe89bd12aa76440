//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional `?status=` filter accepted by every list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct StatusFilter {
    pub status: Option<String>,
}

impl StatusFilter {
    /// The filter value, treating an empty string as absent.
    pub fn as_deref(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}
