use std::sync::Arc;

use popevents_mail::Notifier;
use popevents_storage::ObjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: popevents_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Destination for uploaded files.
    pub store: Arc<dyn ObjectStore>,
    /// Operator notifications (SMTP or disabled).
    pub notifier: Arc<dyn Notifier>,
}
