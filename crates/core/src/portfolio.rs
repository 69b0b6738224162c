//! Portfolio item validation.

use crate::error::CoreError;

/// Maximum number of images attached to one portfolio item.
pub const MAX_IMAGES: usize = 10;

/// Validate a portfolio image list: 1..=10 non-blank URLs.
pub fn validate_images(images: &[String]) -> Result<(), CoreError> {
    if images.is_empty() {
        return Err(CoreError::Validation(
            "At least one image is required".into(),
        ));
    }
    if images.len() > MAX_IMAGES {
        return Err(CoreError::Validation(format!(
            "A maximum of {MAX_IMAGES} images is allowed"
        )));
    }
    if images.iter().any(|url| url.trim().is_empty()) {
        return Err(CoreError::Validation("Image URLs must not be empty".into()));
    }
    Ok(())
}
