//! Publication status vocabulary.
//!
//! Every content table carries a `status` text column. Most accept only
//! `active` / `inactive`; announcements and news/events keep the editorial
//! states the CMS has accumulated over time.

use crate::error::CoreError;
use crate::vocab::validate_choice;

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";
pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_PUBLISHED: &str = "published";
pub const STATUS_ARCHIVED: &str = "archived";

/// Plain visibility toggle used by most resources.
pub const BINARY_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_INACTIVE];

pub const ANNOUNCEMENT_STATUSES: &[&str] = &[
    STATUS_ACTIVE,
    STATUS_INACTIVE,
    STATUS_DRAFT,
    STATUS_PUBLISHED,
    STATUS_ARCHIVED,
];

pub const NEWS_EVENT_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_INACTIVE, STATUS_DRAFT];

/// Validate `status` against the set a given table accepts.
pub fn validate_status(status: &str, allowed: &[&str]) -> Result<(), CoreError> {
    validate_choice("status", status, allowed)
}

/// Map a toggle request onto the status it produces.
pub fn toggle_target(make_active: bool) -> &'static str {
    if make_active {
        STATUS_ACTIVE
    } else {
        STATUS_INACTIVE
    }
}
