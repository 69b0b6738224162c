//! Route definitions for `/admin` back-office views.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET /dashboard   -> stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard::stats))
}
