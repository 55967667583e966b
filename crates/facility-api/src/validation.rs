//! Input validation rules for create and upload forms
//!
//! Every rule returns a `validator::ValidationError` whose `code` identifies
//! the failed rule and whose `message` is suitable for display next to the
//! offending field.

use std::borrow::Cow;

use validator::ValidationError;

/// Maximum length for a notice or document title
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for notice content
pub const MAX_CONTENT_LENGTH: usize = 5000;

/// Maximum length for a document description
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Maximum upload payload (10 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

fn error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

/// Field must contain something other than whitespace
pub fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = error("required", format!("Please enter the {}.", field));
        err.add_param(Cow::Borrowed("field"), &field);
        return Err(err);
    }
    Ok(())
}

/// Field must not exceed `max` characters.
///
/// Counts characters of the raw input, surrounding whitespace included.
pub fn validate_max_chars(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length > max {
        let mut err = error(
            "too_long",
            format!("The {} cannot exceed {} characters.", field, max),
        );
        err.add_param(Cow::Borrowed("field"), &field);
        err.add_param(Cow::Borrowed("max"), &max);
        err.add_param(Cow::Borrowed("length"), &length);
        return Err(err);
    }
    Ok(())
}

/// Upload payload must not exceed [`MAX_UPLOAD_BYTES`]
pub fn validate_file_size(size: u64) -> Result<(), ValidationError> {
    if size > MAX_UPLOAD_BYTES {
        let mut err = error(
            "file_too_large",
            "The file size cannot exceed 10MB.".to_string(),
        );
        err.add_param(Cow::Borrowed("size"), &size);
        err.add_param(Cow::Borrowed("max"), &MAX_UPLOAD_BYTES);
        return Err(err);
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    validate_max_chars("title", title, MAX_TITLE_LENGTH)
}

pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    validate_max_chars("content", content, MAX_CONTENT_LENGTH)
}

pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    validate_max_chars("description", description, MAX_DESCRIPTION_LENGTH)
}
