//! Route definitions for the contact form.

use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(contact::submit))
}
