//! Small response bodies shared by several handlers.

use serde::Serialize;

/// `{ "success": true }`, returned by deletes and the contact form.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Body of a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}
