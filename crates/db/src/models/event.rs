//! Event entity model and DTOs.

use popevents_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::patch::double_option;

/// An event row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub location: String,
    pub map_url: Option<String>,
    pub cover_image: String,
    pub is_upcoming: bool,
    pub is_published: bool,
    pub max_capacity: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An event together with the number of registrations it holds.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventWithCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub event: Event,
    pub registration_count: i64,
}

/// Request body for creating an event. Required fields are validated by
/// the handler so missing values surface as validation errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEvent {
    pub title: Option<String>,
    /// Derived from the title when omitted.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub location: Option<String>,
    pub map_url: Option<String>,
    pub cover_image: Option<String>,
    /// Defaults to `true` if omitted.
    pub is_upcoming: Option<bool>,
    /// Defaults to `true` if omitted.
    pub is_published: Option<bool>,
    pub max_capacity: Option<i32>,
}

/// A validated event ready for insertion.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub location: String,
    pub map_url: Option<String>,
    pub cover_image: String,
    pub is_upcoming: bool,
    pub is_published: bool,
    pub max_capacity: Option<i32>,
}

/// DTO for updating an event. Absent fields keep their stored value;
/// `end_date`, `map_url` and `max_capacity` accept an explicit `null` to clear.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub date: Option<Timestamp>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<Timestamp>>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub map_url: Option<Option<String>>,
    pub cover_image: Option<String>,
    pub is_upcoming: Option<bool>,
    pub is_published: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub max_capacity: Option<Option<i32>>,
}

/// Query parameters for `GET /events`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventListParams {
    /// When `Some`, only events whose `is_upcoming` flag matches.
    pub upcoming: Option<bool>,
    /// When `Some`, only events whose `is_published` flag matches.
    pub published: Option<bool>,
}
