//! Request body extractors.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections (malformed JSON, missing or mistyped
/// fields, wrong content type) are reported as [`AppError::BadRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
