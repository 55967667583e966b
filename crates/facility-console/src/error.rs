//! Field-attributed validation failures

use validator::ValidationError;

/// A form field that failed client-side validation
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: &'static str,
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, code: &str, message: &str) -> Self {
        Self {
            field,
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    pub fn from_validation(field: &'static str, err: ValidationError) -> Self {
        let code = err.code.into_owned();
        let message = err
            .message
            .map(|m| m.into_owned())
            .unwrap_or_else(|| code.clone());
        Self {
            field,
            code,
            message,
        }
    }
}

/// Attach `field` to a validation rule result
pub(crate) fn check(
    field: &'static str,
    result: Result<(), ValidationError>,
) -> Result<(), FieldError> {
    result.map_err(|e| FieldError::from_validation(field, e))
}
