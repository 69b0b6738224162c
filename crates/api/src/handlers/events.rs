//! Handlers for the `/events` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use popevents_core::error::CoreError;
use popevents_core::event::{
    validate_capacity, validate_date_range, validate_location, validate_title,
};
use popevents_core::slug::{resolve_slug, validate_slug};
use popevents_core::types::DbId;
use popevents_core::validation::{optional_text, require_text};
use popevents_db::models::event::{
    CreateEvent, Event, EventListParams, EventWithCount, NewEvent, UpdateEvent,
};
use popevents_db::repositories::EventRepo;

use crate::error::{conflict_on, AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

const UQ_EVENT_SLUG: &str = "uq_events_slug";
const MSG_SLUG_TAKEN: &str = "An event with this slug already exists";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Event", id })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateEvent) -> Result<NewEvent, CoreError> {
    let title = validate_title(input.title.as_deref())?;
    let slug = resolve_slug(input.slug.as_deref(), title)?;
    let description = require_text("description", input.description.as_deref())?;
    let date = input
        .date
        .ok_or_else(|| CoreError::Validation("date is required".into()))?;
    let location = validate_location(input.location.as_deref())?;
    let cover_image = require_text("cover_image", input.cover_image.as_deref())?;

    validate_date_range(date, input.end_date)?;
    validate_capacity(input.max_capacity)?;

    Ok(NewEvent {
        slug,
        title: title.to_string(),
        description: description.to_string(),
        date,
        end_date: input.end_date,
        location: location.to_string(),
        map_url: optional_text(input.map_url.as_deref()),
        cover_image: cover_image.to_string(),
        is_upcoming: input.is_upcoming.unwrap_or(true),
        is_published: input.is_published.unwrap_or(true),
        max_capacity: input.max_capacity,
    })
}

/// Validate a patch against the stored event and return it with text
/// fields trimmed.
fn validate_update(current: &Event, input: UpdateEvent) -> Result<UpdateEvent, CoreError> {
    let title = match input.title.as_deref() {
        Some(t) => Some(validate_title(Some(t))?.to_string()),
        None => None,
    };
    let slug = match input.slug.as_deref().map(str::trim) {
        Some(s) => {
            validate_slug(s)?;
            Some(s.to_string())
        }
        None => None,
    };
    let description = match input.description.as_deref() {
        Some(d) => Some(require_text("description", Some(d))?.to_string()),
        None => None,
    };
    let location = match input.location.as_deref() {
        Some(l) => Some(validate_location(Some(l))?.to_string()),
        None => None,
    };
    let cover_image = match input.cover_image.as_deref() {
        Some(c) => Some(require_text("cover_image", Some(c))?.to_string()),
        None => None,
    };
    if let Some(capacity) = input.max_capacity {
        validate_capacity(capacity)?;
    }

    let date = input.date.unwrap_or(current.date);
    let end_date = input.end_date.unwrap_or(current.end_date);
    validate_date_range(date, end_date)?;

    Ok(UpdateEvent {
        title,
        slug,
        description,
        location,
        cover_image,
        map_url: input
            .map_url
            .map(|url| optional_text(url.as_deref())),
        ..input
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/events
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> AppResult<Json<Vec<EventWithCount>>> {
    let events = EventRepo::list(&state.pool, &params).await?;
    Ok(Json(events))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EventWithCount>> {
    let event = EventRepo::find_with_count(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(event))
}

/// GET /api/v1/events/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<EventWithCount>> {
    let event = EventRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;
    Ok(Json(event))
}

/// POST /api/v1/events
pub async fn create(
    admin: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let new = validate_create(&input)?;
    let event = EventRepo::create(&state.pool, &new)
        .await
        .map_err(|e| conflict_on(e, UQ_EVENT_SLUG, MSG_SLUG_TAKEN))?;

    tracing::info!(event_id = event.id, slug = %event.slug, admin = %admin.email, "Event created");
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/v1/events/{id}
pub async fn update(
    admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateEvent>,
) -> AppResult<Json<Event>> {
    let current = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let patch = validate_update(&current, input)?;

    let event = EventRepo::update(&state.pool, id, &patch)
        .await
        .map_err(|e| conflict_on(e, UQ_EVENT_SLUG, MSG_SLUG_TAKEN))?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(event_id = id, admin = %admin.email, "Event updated");
    Ok(Json(event))
}

/// DELETE /api/v1/events/{id}
///
/// Removes the event together with all of its registrations.
pub async fn delete(
    admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !EventRepo::delete_with_registrations(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(event_id = id, admin = %admin.email, "Event deleted");
    Ok(Json(SuccessResponse::ok()))
}
