//! Event field validation.

use crate::error::CoreError;
use crate::types::Timestamp;
use crate::validation::{max_length, require_text};

const MAX_TITLE_LEN: usize = 200;
const MAX_LOCATION_LEN: usize = 300;

/// Validate an event title (non-blank, <= 200 chars). Returns it trimmed.
pub fn validate_title(title: Option<&str>) -> Result<&str, CoreError> {
    let title = require_text("title", title)?;
    max_length("title", title, MAX_TITLE_LEN)?;
    Ok(title)
}

/// Validate an event location (non-blank, <= 300 chars). Returns it trimmed.
pub fn validate_location(location: Option<&str>) -> Result<&str, CoreError> {
    let location = require_text("location", location)?;
    max_length("location", location, MAX_LOCATION_LEN)?;
    Ok(location)
}

/// Validate an optional maximum capacity. `None` means unlimited.
pub fn validate_capacity(max_capacity: Option<i32>) -> Result<(), CoreError> {
    match max_capacity {
        Some(n) if n < 1 => Err(CoreError::Validation(
            "max_capacity must be at least 1".into(),
        )),
        _ => Ok(()),
    }
}

/// An end date, when present, must not precede the start date.
pub fn validate_date_range(date: Timestamp, end_date: Option<Timestamp>) -> Result<(), CoreError> {
    if let Some(end) = end_date {
        if end < date {
            return Err(CoreError::Validation(
                "end_date must not be before date".into(),
            ));
        }
    }
    Ok(())
}
