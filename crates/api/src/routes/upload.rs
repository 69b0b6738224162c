//! Route definitions for file uploads.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/upload`.
///
/// ```text
/// POST /   -> upload
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload))
        .layer(DefaultBodyLimit::max(upload::UPLOAD_BODY_LIMIT))
}
