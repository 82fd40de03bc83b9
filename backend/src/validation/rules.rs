//! Common validation rules shared across request payloads.

use validator::ValidationError;

/// Rejects values that are empty or contain only whitespace.
pub fn validate_required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Every image entry must be a non-blank URL or path.
pub fn validate_image_urls(images: &[String]) -> Result<(), ValidationError> {
    if images.iter().any(|url| url.trim().is_empty()) {
        return Err(ValidationError::new("image_url_blank"));
    }
    Ok(())
}
