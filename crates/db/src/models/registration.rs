//! Registration entity model and DTOs.

use popevents_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::event::Event;

/// A registration row from the `registrations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Registration {
    pub id: DbId,
    pub event_id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: Option<String>,
    pub license_file_url: Option<String>,
    pub additional_notes: Option<String>,
    /// One of `pending`, `approved`, `rejected`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The subset of event columns shown next to each registration in lists.
///
/// Read from aliased `event_*` columns of the list query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventSummary {
    #[sqlx(rename = "event_id")]
    pub id: DbId,
    #[sqlx(rename = "event_title")]
    pub title: String,
    #[sqlx(rename = "event_date")]
    pub date: Timestamp,
    #[sqlx(rename = "event_location")]
    pub location: String,
}

/// A registration row joined with its event summary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RegistrationListItem {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub registration: Registration,
    #[sqlx(flatten)]
    pub event: EventSummary,
}

/// A registration with its full event, as returned by detail endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationWithEvent {
    #[serde(flatten)]
    pub registration: Registration,
    pub event: Event,
}

/// Public registration submission. Every field is optional at the
/// deserialisation layer so missing values become validation errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRegistration {
    pub event_id: Option<DbId>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub license_file_url: Option<String>,
    pub additional_notes: Option<String>,
}

/// A validated registration ready for insertion (status starts as pending).
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub event_id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: Option<String>,
    pub license_file_url: Option<String>,
    pub additional_notes: Option<String>,
}

/// Request body for `PUT /registrations/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRegistrationStatus {
    pub status: Option<String>,
}

/// Query parameters for listing registrations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationListParams {
    pub event_id: Option<DbId>,
    pub status: Option<String>,
    pub limit: Option<i64>,
}
