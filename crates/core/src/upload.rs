//! Upload validation and object-key generation.
//!
//! Registration documents and site images have different MIME allow-lists.
//! Object keys are `{folder}/{timestamp_ms}-{random}.{ext}`.

use rand::distr::Alphanumeric;
use rand::Rng;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum accepted upload size (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Error message for files over [`MAX_UPLOAD_BYTES`].
pub const MSG_FILE_TOO_LARGE: &str = "File size exceeds 10MB limit";

/// Folder used when the client does not name one.
pub const DEFAULT_FOLDER: &str = "general";

/// Folder holding registration documents (licenses, permits).
pub const FOLDER_REGISTRATIONS: &str = "registrations";

pub const MIME_JPEG: &str = "image/jpeg";
pub const MIME_PNG: &str = "image/png";
pub const MIME_WEBP: &str = "image/webp";
pub const MIME_GIF: &str = "image/gif";
pub const MIME_PDF: &str = "application/pdf";

/// MIME types accepted for image folders.
pub const IMAGE_MIME_TYPES: &[&str] = &[MIME_JPEG, MIME_PNG, MIME_WEBP, MIME_GIF];

/// MIME types accepted for the registration documents folder.
pub const DOCUMENT_MIME_TYPES: &[&str] = &[MIME_PDF, MIME_JPEG, MIME_PNG];

/// Length of the random part of a generated file name.
const RANDOM_SUFFIX_LEN: usize = 12;

/// Maximum folder path length.
const MAX_FOLDER_LEN: usize = 100;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Normalise and validate a folder tag.
///
/// `None` or blank maps to [`DEFAULT_FOLDER`]. Otherwise the folder must be a
/// relative path of `[a-z0-9_-]` segments separated by `/`.
pub fn normalize_folder(folder: Option<&str>) -> Result<String, CoreError> {
    let folder = match folder.map(str::trim).filter(|f| !f.is_empty()) {
        Some(f) => f.trim_matches('/'),
        None => return Ok(DEFAULT_FOLDER.to_string()),
    };

    if folder.len() > MAX_FOLDER_LEN {
        return Err(CoreError::Validation(format!(
            "Folder must be at most {MAX_FOLDER_LEN} characters"
        )));
    }

    let valid = folder.split('/').all(|segment| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    });
    if !valid {
        return Err(CoreError::Validation(format!("Invalid folder '{folder}'")));
    }

    Ok(folder.to_string())
}

/// The MIME allow-list that applies to a folder.
pub fn allowed_mime_types(folder: &str) -> &'static [&'static str] {
    if folder == FOLDER_REGISTRATIONS {
        DOCUMENT_MIME_TYPES
    } else {
        IMAGE_MIME_TYPES
    }
}

/// Whether uploads to this folder may be made without an admin session.
pub fn is_public_folder(folder: &str) -> bool {
    folder == FOLDER_REGISTRATIONS
}

/// The `type/subtype` part of a MIME type, lower-cased, without parameters.
pub fn mime_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Validate the declared MIME type against the folder's allow-list.
pub fn validate_content_type(folder: &str, content_type: &str) -> Result<(), CoreError> {
    let essence = mime_essence(content_type);

    if allowed_mime_types(folder).contains(&essence.as_str()) {
        return Ok(());
    }

    let message = if folder == FOLDER_REGISTRATIONS {
        "Invalid file type. Only PDF, JPG, and PNG allowed"
    } else {
        "Invalid file type. Only images allowed"
    };
    Err(CoreError::Validation(message.into()))
}

/// Reject files over [`MAX_UPLOAD_BYTES`].
pub fn validate_size(size: usize) -> Result<(), CoreError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(MSG_FILE_TOO_LARGE.into()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

/// File extension for a MIME type in the allow-lists.
pub fn extension_for_mime(content_type: &str) -> Option<&'static str> {
    match content_type {
        MIME_JPEG => Some("jpg"),
        MIME_PNG => Some("png"),
        MIME_WEBP => Some("webp"),
        MIME_GIF => Some("gif"),
        MIME_PDF => Some("pdf"),
        _ => None,
    }
}

/// Pick the extension for a stored file: the original name's extension when
/// it is short and alphanumeric, otherwise one derived from the MIME type.
pub fn file_extension(original_name: &str, content_type: &str) -> String {
    let from_name = original_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()));

    from_name
        .or_else(|| extension_for_mime(content_type).map(str::to_string))
        .unwrap_or_else(|| "bin".to_string())
}

/// Build a collision-resistant file name from its parts.
pub fn build_filename(timestamp_ms: i64, random: &str, extension: &str) -> String {
    format!("{timestamp_ms}-{random}.{extension}")
}

/// Generate the storage key for an upload: `{folder}/{timestamp}-{random}.{ext}`.
pub fn generate_object_key(folder: &str, original_name: &str, content_type: &str) -> String {
    let random: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    let filename = build_filename(
        chrono::Utc::now().timestamp_millis(),
        &random,
        &file_extension(original_name, content_type),
    );
    format!("{folder}/{filename}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_defaults_to_general() {
        assert_eq!(normalize_folder(None).unwrap(), "general");
        assert_eq!(normalize_folder(Some("  ")).unwrap(), "general");
    }

    #[test]
    fn folder_nested_path_accepted() {
        assert_eq!(normalize_folder(Some("site/logo")).unwrap(), "site/logo");
        assert_eq!(normalize_folder(Some("/portfolio/")).unwrap(), "portfolio");
    }

    #[test]
    fn folder_traversal_rejected() {
        assert!(normalize_folder(Some("../etc")).is_err());
        assert!(normalize_folder(Some("a//b")).is_err());
        assert!(normalize_folder(Some("Portfolio")).is_err());
    }

    #[test]
    fn registration_folder_accepts_pdf() {
        assert!(validate_content_type("registrations", "application/pdf").is_ok());
        assert!(validate_content_type("registrations", "image/png").is_ok());
        assert!(validate_content_type("registrations", "image/gif").is_err());
    }

    #[test]
    fn image_folder_rejects_pdf_and_exe() {
        assert!(validate_content_type("portfolio", "image/webp").is_ok());
        assert!(validate_content_type("portfolio", "application/pdf").is_err());
        assert!(validate_content_type("portfolio", "application/x-msdownload").is_err());
    }

    #[test]
    fn content_type_parameters_ignored() {
        assert!(validate_content_type("events", "IMAGE/JPEG; charset=binary").is_ok());
    }

    #[test]
    fn size_limit() {
        assert!(validate_size(MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_size(MAX_UPLOAD_BYTES + 1).is_err());
        assert!(validate_size(15 * 1024 * 1024).is_err());
    }

    #[test]
    fn extension_from_name_or_mime() {
        assert_eq!(file_extension("Photo.JPEG", "image/jpeg"), "jpeg");
        assert_eq!(file_extension("scan", "application/pdf"), "pdf");
        assert_eq!(file_extension("weird.tar gz", "image/png"), "png");
        assert_eq!(file_extension("noext", "application/octet-stream"), "bin");
    }

    #[test]
    fn filename_shape() {
        assert_eq!(build_filename(1700000000000, "abc123", "png"), "1700000000000-abc123.png");
    }

    #[test]
    fn object_key_is_under_folder_and_unique() {
        let a = generate_object_key("portfolio", "stage.png", "image/png");
        let b = generate_object_key("portfolio", "stage.png", "image/png");
        assert!(a.starts_with("portfolio/"));
        assert!(a.ends_with(".png"));
        assert_ne!(a, b);
    }

    #[test]
    fn only_registrations_folder_is_public() {
        assert!(is_public_folder("registrations"));
        assert!(!is_public_folder("portfolio"));
        assert!(!is_public_folder("general"));
    }
}
