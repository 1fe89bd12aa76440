//! Request validation helpers.
//!
//! DTOs derive [`validator::Validate`]; [`validate_input`] flattens the
//! resulting errors into a single [`CoreError::Validation`] so every
//! endpoint reports missing or malformed fields the same way.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::Date;

/// Run `input.validate()` and convert failures into a readable message.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Render `errors` as `"field: message; field: message"`, sorted by field
/// name so the output is stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            format!("{field}: {}", reasons.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Reject a date range whose end precedes its start. Open ranges pass.
pub fn validate_date_range(start: Option<Date>, end: Option<Date>) -> Result<(), CoreError> {
    match (start, end) {
        (Some(s), Some(e)) if e < s => Err(CoreError::Validation(format!(
            "end_date ({e}) must not be before start_date ({s})"
        ))),
        _ => Ok(()),
    }
}
