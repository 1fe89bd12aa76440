pub mod about;
pub mod academic_calendar;
pub mod affiliates;
pub mod announcements;
pub mod auth;
pub mod campuses;
pub mod faculties;
pub mod history;
pub mod leadership;
pub mod library;
pub mod mission_vision;
pub mod news_events;
pub mod policies;
pub mod programmes;
pub mod staff;
pub mod strategic_plan;

use cms_core::error::CoreError;
use cms_core::status::validate_status;
use cms_core::types::DbId;
use cms_core::vocab::validate_choice;

use crate::error::AppError;

/// Validate an optional `status` against the set the table accepts.
pub(crate) fn check_status(status: Option<&str>, allowed: &[&str]) -> Result<(), CoreError> {
    status.map_or(Ok(()), |s| validate_status(s, allowed))
}

/// Validate an optional enumerated field (`kind`, `level`, `role`).
pub(crate) fn check_choice(
    field: &str,
    value: Option<&str>,
    allowed: &[&str],
) -> Result<(), CoreError> {
    value.map_or(Ok(()), |v| validate_choice(field, v, allowed))
}

pub(crate) fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}
