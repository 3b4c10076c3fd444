// Validation logic for the endpoint / interval form

use crate::models::{Field, FormState, ValidationErrors};

/// Field-level validation failures
///
/// Each field reports at most one of these; the malformed variants are only
/// produced when the value is not missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Endpoint URL is required.")]
    EndpointUrlRequired,

    #[error("Enter a valid URL.")]
    InvalidUrl,

    #[error("Schedule interval is required.")]
    ScheduleIntervalRequired,

    #[error("Interval must be a number.")]
    NotNumeric,
}

impl FieldError {
    /// Field this error belongs to
    pub fn field(&self) -> Field {
        match self {
            FieldError::EndpointUrlRequired | FieldError::InvalidUrl => Field::EndpointUrl,
            FieldError::ScheduleIntervalRequired | FieldError::NotNumeric => Field::ScheduleInterval,
        }
    }

    /// True for the "missing" kind, false for "malformed"
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            FieldError::EndpointUrlRequired | FieldError::ScheduleIntervalRequired
        )
    }
}

/// Validate the endpoint URL
///
/// # Rules
/// - Must not be empty
/// - Must parse as an absolute URL with a scheme and an authority (host)
pub fn validate_endpoint_url(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::EndpointUrlRequired);
    }

    match url::Url::parse(value) {
        Ok(parsed) if parsed.has_host() => Ok(()),
        _ => Err(FieldError::InvalidUrl),
    }
}

/// Validate the schedule interval
///
/// # Rules
/// - Must not be empty
/// - Must be one or more ASCII decimal digits, nothing else (no sign, no unit, no whitespace)
pub fn validate_schedule_interval(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::ScheduleIntervalRequired);
    }

    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::NotNumeric);
    }

    Ok(())
}

/// Run every field rule and collect exactly the failing fields
pub fn validate_form(form: &FormState) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_endpoint_url(&form.endpoint_url) {
        errors.insert(Field::EndpointUrl, e);
    }
    if let Err(e) = validate_schedule_interval(&form.schedule_interval) {
        errors.insert(Field::ScheduleInterval, e);
    }

    errors
}
