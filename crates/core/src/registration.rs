//! Registration intake rules: submission validation, admission checks and
//! status values.
//!
//! The admission check is a pure function over an [`AdmissionSnapshot`]
//! that the intake workflow reads inside its locked transaction, so the
//! decision and the insert see the same state.

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};
use crate::validation::{
    max_length, optional_text, require_text, validate_email, validate_phone,
};

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

/// All valid registration statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

/// Validate a registration status against the known set.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if !VALID_STATUSES.contains(&status) {
        return Err(CoreError::Validation(format!(
            "Invalid status '{}'. Valid statuses: {}",
            status,
            VALID_STATUSES.join(", ")
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_NOT_ACCEPTING: &str = "This event is not accepting registrations";
pub const MSG_ENDED: &str = "This event has already ended";
pub const MSG_FULLY_BOOKED: &str = "This event is fully booked";
pub const MSG_ALREADY_REGISTERED: &str = "You have already registered for this event";

// ---------------------------------------------------------------------------
// Submission validation
// ---------------------------------------------------------------------------

const MAX_NAME_LEN: usize = 200;
const MAX_NOTES_LEN: usize = 5_000;

/// Borrowed view of the raw fields of a public registration submission.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubmissionFields<'a> {
    pub event_id: Option<DbId>,
    pub full_name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub company_name: Option<&'a str>,
    pub license_file_url: Option<&'a str>,
    pub additional_notes: Option<&'a str>,
}

/// A submission that passed field validation. Text is trimmed, blank
/// optionals are `None` and the email is lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub event_id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: Option<String>,
    pub license_file_url: Option<String>,
    pub additional_notes: Option<String>,
}

/// Validate and normalise a registration submission.
pub fn validate_submission(
    fields: &SubmissionFields<'_>,
) -> Result<ValidatedSubmission, CoreError> {
    let event_id = fields
        .event_id
        .ok_or_else(|| CoreError::Validation("event_id is required".into()))?;
    let full_name = require_text("full_name", fields.full_name)?;
    let email = require_text("email", fields.email)?.to_lowercase();
    let phone = require_text("phone", fields.phone)?;

    max_length("full_name", full_name, MAX_NAME_LEN)?;
    validate_email(&email)?;
    validate_phone(phone)?;

    let company_name = optional_text(fields.company_name);
    if let Some(company) = &company_name {
        max_length("company_name", company, MAX_NAME_LEN)?;
    }

    let license_file_url = optional_text(fields.license_file_url);
    if let Some(url) = &license_file_url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(CoreError::Validation(
                "license_file_url must be an http(s) URL".into(),
            ));
        }
    }

    let additional_notes = optional_text(fields.additional_notes);
    if let Some(notes) = &additional_notes {
        max_length("additional_notes", notes, MAX_NOTES_LEN)?;
    }

    Ok(ValidatedSubmission {
        event_id,
        full_name: full_name.to_string(),
        email,
        phone: phone.to_string(),
        company_name,
        license_file_url,
        additional_notes,
    })
}

// ---------------------------------------------------------------------------
// Admission
// ---------------------------------------------------------------------------

/// Event and registration state read under the event row lock.
#[derive(Debug, Clone)]
pub struct AdmissionSnapshot {
    pub is_published: bool,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
    pub max_capacity: Option<i32>,
    /// Registrations already stored for the event.
    pub registration_count: i64,
    /// Whether a registration with the same email already exists.
    pub already_registered: bool,
}

impl AdmissionSnapshot {
    /// The instant after which the event no longer takes registrations.
    pub fn closes_at(&self) -> Timestamp {
        self.ends_at.unwrap_or(self.starts_at)
    }
}

/// Decide whether a new registration may be admitted.
///
/// Checks run in a fixed order: published, not ended, capacity, duplicate.
pub fn check_admission(snapshot: &AdmissionSnapshot, now: Timestamp) -> Result<(), CoreError> {
    if !snapshot.is_published {
        return Err(CoreError::InvalidState(MSG_NOT_ACCEPTING.into()));
    }
    if snapshot.closes_at() < now {
        return Err(CoreError::InvalidState(MSG_ENDED.into()));
    }
    if let Some(max) = snapshot.max_capacity {
        if snapshot.registration_count >= i64::from(max) {
            return Err(CoreError::CapacityExceeded(MSG_FULLY_BOOKED.into()));
        }
    }
    if snapshot.already_registered {
        return Err(CoreError::Conflict(MSG_ALREADY_REGISTERED.into()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
