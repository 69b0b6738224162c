pub mod admin;
pub mod auth;
pub mod contact;
pub mod events;
pub mod health;
pub mod portfolio;
pub mod registrations;
pub mod settings;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                       login (public)
/// /auth/me                          current admin (requires auth)
///
/// /events                           list (public), create (admin)
/// /events/{id}                      get (public), update, delete (admin)
/// /events/slug/{slug}               get by slug (public)
///
/// /registrations                    list (admin), submit (public)
/// /registrations/{id}               get, update status, delete (admin)
///
/// /portfolio                        list (public), create (admin)
/// /portfolio/{id}                   get (public), update, delete (admin)
///
/// /settings                         get (public), update (admin)
///
/// /upload                           multipart upload (public for registrations)
///
/// /contact                          contact form (public)
///
/// /admin/dashboard                  summary counts (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/events", events::router())
        .nest("/registrations", registrations::router())
        .nest("/portfolio", portfolio::router())
        .nest("/settings", settings::router())
        .nest("/upload", upload::router())
        .nest("/contact", contact::router())
        .nest("/admin", admin::router())
}
