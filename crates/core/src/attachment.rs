//! Receipt attachment rules.

use crate::error::CoreError;

/// Receipt file extensions accepted on a new bill.
pub const SUPPORTED_ATTACHMENT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Message shown when a receipt has an unsupported extension.
pub const UNSUPPORTED_ATTACHMENT_MESSAGE: &str =
    "Seuls les fichiers jpg, jpeg et png sont acceptés";

/// Validate a receipt file name by extension (case-insensitive).
pub fn validate_attachment_name(file_name: &str) -> Result<(), CoreError> {
    let ext = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
        _ => String::new(),
    };
    if SUPPORTED_ATTACHMENT_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            UNSUPPORTED_ATTACHMENT_MESSAGE.to_string(),
        ))
    }
}

/// Strip any client-side directory components from an uploaded file name.
pub fn sanitize_file_name(file_name: &str) -> &str {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
}
