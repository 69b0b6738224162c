//! Handler for the admin dashboard summary.

use axum::extract::State;
use axum::Json;
use popevents_db::models::dashboard::DashboardStats;
use popevents_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/admin/dashboard
pub async fn stats(
    _admin: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardStats>> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}
