//! Handlers for the `/portfolio` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use popevents_core::error::CoreError;
use popevents_core::portfolio::validate_images;
use popevents_core::types::DbId;
use popevents_core::validation::{optional_text, require_text};
use popevents_db::models::portfolio::{
    CreatePortfolioItem, NewPortfolioItem, PortfolioItem, PortfolioListParams,
    UpdatePortfolioItem,
};
use popevents_db::repositories::PortfolioRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "PortfolioItem",
        id,
    })
}

fn trimmed_images(images: &[String]) -> Result<Vec<String>, CoreError> {
    validate_images(images)?;
    Ok(images.iter().map(|url| url.trim().to_string()).collect())
}

fn validate_create(input: &CreatePortfolioItem) -> Result<NewPortfolioItem, CoreError> {
    let title = require_text("title", input.title.as_deref())?;
    let images = input
        .images
        .as_deref()
        .ok_or_else(|| CoreError::Validation("At least one image is required".into()))?;

    Ok(NewPortfolioItem {
        title: title.to_string(),
        description: optional_text(input.description.as_deref()),
        event_name: optional_text(input.event_name.as_deref()),
        images: trimmed_images(images)?,
        sort_order: input.sort_order.unwrap_or(0),
        is_published: input.is_published.unwrap_or(true),
    })
}

fn validate_update(input: UpdatePortfolioItem) -> Result<UpdatePortfolioItem, CoreError> {
    let title = match input.title.as_deref() {
        Some(t) => Some(require_text("title", Some(t))?.to_string()),
        None => None,
    };
    let images = match input.images.as_deref() {
        Some(images) => Some(trimmed_images(images)?),
        None => None,
    };

    Ok(UpdatePortfolioItem {
        title,
        images,
        description: input.description.map(|d| optional_text(d.as_deref())),
        event_name: input.event_name.map(|n| optional_text(n.as_deref())),
        ..input
    })
}

/// GET /api/v1/portfolio
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PortfolioListParams>,
) -> AppResult<Json<Vec<PortfolioItem>>> {
    let items = PortfolioRepo::list(&state.pool, &params).await?;
    Ok(Json(items))
}

/// GET /api/v1/portfolio/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PortfolioItem>> {
    let item = PortfolioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// POST /api/v1/portfolio
pub async fn create(
    admin: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePortfolioItem>,
) -> AppResult<(StatusCode, Json<PortfolioItem>)> {
    let new = validate_create(&input)?;
    let item = PortfolioRepo::create(&state.pool, &new).await?;

    tracing::info!(portfolio_id = item.id, admin = %admin.email, "Portfolio item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/v1/portfolio/{id}
pub async fn update(
    admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdatePortfolioItem>,
) -> AppResult<Json<PortfolioItem>> {
    let patch = validate_update(input)?;
    let item = PortfolioRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(portfolio_id = id, admin = %admin.email, "Portfolio item updated");
    Ok(Json(item))
}

/// DELETE /api/v1/portfolio/{id}
pub async fn delete(
    admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !PortfolioRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(portfolio_id = id, admin = %admin.email, "Portfolio item deleted");
    Ok(Json(SuccessResponse::ok()))
}
