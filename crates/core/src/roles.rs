//! Well-known staff role names.
//!
//! These must match the CHECK constraint on `staff.role`.

use crate::error::CoreError;
use crate::vocab::validate_choice;

pub const ROLE_SUPERADMIN: &str = "SUPERADMIN";
pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_STAFF: &str = "STAFF";

/// Role assigned when a create request omits one.
pub const DEFAULT_ROLE: &str = ROLE_STAFF;

pub const VALID_ROLES: &[&str] = &[ROLE_SUPERADMIN, ROLE_ADMIN, ROLE_STAFF];

pub fn validate_role(role: &str) -> Result<(), CoreError> {
    validate_choice("role", role, VALID_ROLES)
}
