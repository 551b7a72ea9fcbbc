//! Common validation utilities.

use validator::ValidationError;

/// Validates that a text value contains at least one non-whitespace character.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value cannot be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates that an optional text value does not exceed `max` characters.
///
/// Counts characters rather than bytes so accented names are not penalised.
pub fn validate_max_chars(value: Option<&str>, max: u64) -> Result<(), ValidationError> {
    match value {
        Some(v) if v.chars().count() as u64 > max => {
            let mut err = ValidationError::new("length");
            err.message = Some(format!("Must be at most {} characters", max).into());
            err.add_param("max".into(), &max);
            Err(err)
        }
        _ => Ok(()),
    }
}
