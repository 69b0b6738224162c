//! Route definitions for the `/registrations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::registrations;
use crate::state::AppState;

/// Routes mounted at `/registrations`.
///
/// ```text
/// GET    /       -> list (admin)
/// POST   /       -> create (public)
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update_status
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(registrations::list).post(registrations::create))
        .route(
            "/{id}",
            get(registrations::get_by_id)
                .put(registrations::update_status)
                .delete(registrations::delete),
        )
}
