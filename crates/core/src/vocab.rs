//! Closed vocabularies for the `kind` / `level` columns.
//!
//! Each list mirrors a CHECK constraint in the migrations. Handlers validate
//! against these before touching the database so a bad value is a 400 with a
//! readable message rather than a constraint violation.

use crate::error::CoreError;

pub const NEWS_EVENT_KINDS: &[&str] = &["news", "event"];
pub const DEFAULT_NEWS_EVENT_KIND: &str = "event";

pub const AFFILIATE_KINDS: &[&str] = &["affiliate", "partner"];
pub const DEFAULT_AFFILIATE_KIND: &str = "affiliate";

pub const LEADERSHIP_KINDS: &[&str] = &["leader", "directorate"];
pub const DEFAULT_LEADERSHIP_KIND: &str = "leader";

pub const MISSION_VISION_KINDS: &[&str] = &["mission", "vision"];

pub const LIBRARY_KINDS: &[&str] = &["books", "past-papers"];
pub const DEFAULT_LIBRARY_KIND: &str = "books";

pub const LIBRARY_LEVELS: &[&str] = &["Undergraduate", "Postgraduate", "Certificate"];

pub const PROGRAMME_LEVELS: &[&str] = &["undergraduate", "postgraduate", "certificate"];
pub const DEFAULT_PROGRAMME_LEVEL: &str = "undergraduate";

/// Academic calendar kinds are free text; this is only the fallback.
pub const DEFAULT_CALENDAR_KIND: &str = "Event";

pub const DEFAULT_ANNOUNCEMENT_CATEGORY: &str = "General";

/// Check that `value` is one of `allowed`, naming `field` in the error.
pub fn validate_choice(field: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {field} '{value}'. Must be one of: {}",
            allowed.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_known_value() {
        assert!(validate_choice("kind", "partner", AFFILIATE_KINDS).is_ok());
    }

    #[test]
    fn rejects_unknown_value_with_field_name() {
        let err = validate_choice("level", "phd", PROGRAMME_LEVELS).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("Invalid level 'phd'"));
    }

    #[test]
    fn library_levels_are_case_sensitive() {
        assert!(validate_choice("level", "undergraduate", LIBRARY_LEVELS).is_err());
        assert!(validate_choice("level", "Undergraduate", LIBRARY_LEVELS).is_ok());
    }
}
