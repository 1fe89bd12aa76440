//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO
//! - A `Deserialize` + `Validate` update DTO (full-row replace; `status`
//!   and enumerated `kind` fields keep their stored value when omitted)

pub mod about;
pub mod academic_calendar;
pub mod affiliate;
pub mod announcement;
pub mod campus;
pub mod faculty;
pub mod history;
pub mod leadership;
pub mod library;
pub mod mission_vision;
pub mod news_event;
pub mod policy;
pub mod programme;
pub mod staff;
pub mod strategic_plan;

use serde::Deserialize;

/// Body of the `PUT /{id}/toggle` endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleStatus {
    pub make_active: bool,
}
