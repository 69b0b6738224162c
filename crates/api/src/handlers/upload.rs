//! Handler for multipart file uploads.

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use bytes::{Bytes, BytesMut};
use popevents_core::error::CoreError;
use popevents_core::upload::{
    generate_object_key, is_public_folder, mime_essence, normalize_folder, validate_content_type,
    validate_size, MAX_UPLOAD_BYTES, MSG_FILE_TOO_LARGE,
};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::UploadResponse;
use crate::state::AppState;

/// A file part read from the request body.
struct UploadedFile {
    name: String,
    content_type: String,
    data: Bytes,
}

/// Body-limit rejections carry the same message as the streamed size check.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return CoreError::Validation(MSG_FILE_TOO_LARGE.into()).into();
    }
    AppError::BadRequest(err.body_text())
}

/// Read a file part chunk by chunk, stopping as soon as it exceeds the limit.
async fn read_file(mut field: Field<'_>) -> AppResult<UploadedFile> {
    let name = field.file_name().unwrap_or("upload").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let mut data = BytesMut::new();
    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        validate_size(data.len() + chunk.len())?;
        data.extend_from_slice(&chunk);
    }

    Ok(UploadedFile {
        name,
        content_type,
        data: data.freeze(),
    })
}

/// Uploads outside the public folder need an admin token.
fn authorize(state: &AppState, headers: &HeaderMap, folder: &str) -> AppResult<Option<AuthUser>> {
    if is_public_folder(folder) {
        return Ok(None);
    }
    AuthUser::from_headers(headers, &state.config.jwt).map(Some)
}

/// POST /api/v1/upload
///
/// Multipart form with a `file` part and an optional `folder` field.
/// Uploads into the `registrations` folder are public; every other folder
/// requires an admin token. Returns the public URL of the stored object.
pub async fn upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut file: Option<UploadedFile> = None;
    let mut folder: Option<String> = None;
    let mut admin: Option<AuthUser> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name().unwrap_or("") {
            "file" => {
                // When the folder is already known, reject anonymous callers
                // before buffering the file.
                if let Some(folder) = folder.as_deref() {
                    admin = authorize(&state, &headers, folder)?;
                }
                file = Some(read_file(field).await?);
            }
            "folder" => {
                let text = field.text().await.map_err(multipart_error)?;
                let normalized = normalize_folder(Some(&text))?;
                admin = authorize(&state, &headers, &normalized)?;
                folder = Some(normalized);
            }
            _ => {}
        }
    }

    let folder = match folder {
        Some(folder) => folder,
        None => {
            let folder = normalize_folder(None)?;
            admin = authorize(&state, &headers, &folder)?;
            folder
        }
    };

    let file = file.ok_or_else(|| AppError::Core(CoreError::Validation("No file provided".into())))?;
    if file.data.is_empty() {
        return Err(CoreError::Validation("Uploaded file is empty".into()).into());
    }

    let content_type = mime_essence(&file.content_type);
    validate_content_type(&folder, &content_type)?;

    let key = generate_object_key(&folder, &file.name, &content_type);
    let size = file.data.len();
    let url = state.store.put(&key, file.data, &content_type).await?;

    tracing::info!(
        key = %key,
        size,
        admin = admin.as_ref().map(|a| a.email.as_str()),
        "File uploaded",
    );
    Ok(Json(UploadResponse { url }))
}

/// Request body limit for the upload route: the file limit plus room for
/// multipart framing and the folder field.
pub const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 1024 * 1024;
