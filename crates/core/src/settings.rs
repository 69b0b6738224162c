//! Site settings singleton constants.

use crate::error::CoreError;

/// The fixed primary key of the single settings row.
pub const SETTINGS_ID: &str = "main";

/// Company name returned before the settings row is first written.
pub const DEFAULT_COMPANY_NAME: &str = "Pop Events";

/// Tagline returned before the settings row is first written.
pub const DEFAULT_TAGLINE: &str = "Your Premier Event Partner in Kuwait";

/// A supplied company name must not be blank.
pub fn validate_company_name(name: Option<&str>) -> Result<(), CoreError> {
    match name {
        Some(n) if n.trim().is_empty() => Err(CoreError::Validation(
            "company_name must not be empty".into(),
        )),
        _ => Ok(()),
    }
}
