//! URL slug generation and validation.

use crate::error::CoreError;

/// Maximum slug length accepted for events.
pub const MAX_SLUG_LEN: usize = 200;

/// Generate a URL-safe slug from a title.
///
/// Lowercases, turns every run of non-alphanumeric characters into a single
/// hyphen, and trims leading/trailing hyphens. Applying it to its own output
/// returns the same string.
pub fn generate_slug(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    let mut prev_hyphen = false;
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            result.push('-');
            prev_hyphen = true;
        }
    }

    result.trim_matches('-').to_string()
}

/// Validate a slug (non-empty, only lowercase alphanumeric + single hyphens,
/// no leading/trailing hyphen).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LEN} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    if generate_slug(slug) != slug {
        return Err(CoreError::Validation(
            "Slug must not start or end with a hyphen or contain consecutive hyphens".into(),
        ));
    }
    Ok(())
}

/// Resolve the slug for a new event: an explicit slug is validated as-is,
/// otherwise one is derived from the title.
pub fn resolve_slug(explicit: Option<&str>, title: &str) -> Result<String, CoreError> {
    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => {
            validate_slug(slug)?;
            Ok(slug.to_string())
        }
        None => {
            let slug = generate_slug(title);
            if slug.is_empty() {
                return Err(CoreError::Validation(
                    "Cannot derive a slug from the title; provide one explicitly".into(),
                ));
            }
            validate_slug(&slug)?;
            Ok(slug)
        }
    }
}
