//! Handlers for the `/settings` singleton.

use axum::extract::State;
use axum::Json;
use popevents_core::settings::validate_company_name;
use popevents_db::models::settings::{SiteSettings, UpdateSiteSettings};
use popevents_db::repositories::SettingsRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/settings
///
/// Returns the defaults until settings are first saved.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<SiteSettings>> {
    let settings = SettingsRepo::get(&state.pool)
        .await?
        .unwrap_or_else(SiteSettings::defaults);
    Ok(Json(settings))
}

/// PUT /api/v1/settings
///
/// Absent fields keep their stored value; `""` clears an optional field.
pub async fn update(
    admin: AuthUser,
    State(state): State<AppState>,
    AppJson(mut input): AppJson<UpdateSiteSettings>,
) -> AppResult<Json<SiteSettings>> {
    validate_company_name(input.company_name.as_deref())?;
    input.company_name = input.company_name.map(|name| name.trim().to_string());

    let settings = SettingsRepo::upsert(&state.pool, &input).await?;

    tracing::info!(admin = %admin.email, "Site settings updated");
    Ok(Json(settings))
}
