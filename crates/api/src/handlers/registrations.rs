//! Handlers for the `/registrations` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use popevents_core::error::CoreError;
use popevents_core::registration::validate_status;
use popevents_core::types::DbId;
use popevents_db::models::registration::{
    CreateRegistration, RegistrationListItem, RegistrationListParams, RegistrationWithEvent,
    UpdateRegistrationStatus,
};
use popevents_db::repositories::RegistrationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::intake;
use crate::middleware::auth::AuthUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Registration",
        id,
    })
}

/// POST /api/v1/registrations
///
/// Public intake. See [`intake::submit`].
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRegistration>,
) -> AppResult<(StatusCode, Json<RegistrationWithEvent>)> {
    let created = intake::submit(&state, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/registrations
pub async fn list(
    _admin: AuthUser,
    State(state): State<AppState>,
    Query(mut params): Query<RegistrationListParams>,
) -> AppResult<Json<Vec<RegistrationListItem>>> {
    if let Some(status) = params.status.as_deref() {
        validate_status(status)?;
    }
    // Full listing for the admin table; the dashboard uses its own limit.
    params.limit = None;

    let registrations = RegistrationRepo::list(&state.pool, &params).await?;
    Ok(Json(registrations))
}

/// GET /api/v1/registrations/{id}
pub async fn get_by_id(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RegistrationWithEvent>> {
    let registration = RegistrationRepo::find_with_event(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(registration))
}

/// PUT /api/v1/registrations/{id}
///
/// Set the review status. Any status may follow any other.
pub async fn update_status(
    admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateRegistrationStatus>,
) -> AppResult<Json<RegistrationWithEvent>> {
    let status = input
        .status
        .as_deref()
        .map(str::trim)
        .ok_or_else(|| AppError::Core(CoreError::Validation("status is required".into())))?;
    validate_status(status)?;

    RegistrationRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or_else(|| not_found(id))?;

    let registration = RegistrationRepo::find_with_event(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(registration_id = id, status, admin = %admin.email, "Registration status updated");
    Ok(Json(registration))
}

/// DELETE /api/v1/registrations/{id}
pub async fn delete(
    admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !RegistrationRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(registration_id = id, admin = %admin.email, "Registration deleted");
    Ok(Json(SuccessResponse::ok()))
}
