//! Public registration intake.
//!
//! Field validation runs first. Then, inside one transaction holding a row
//! lock on the event, the admission checks (published, not ended, capacity,
//! duplicate email) run against the current state and the registration is
//! inserted. Concurrent submissions for the same event serialise on the lock.
//! The operator notification is sent after commit and never affects the
//! outcome.

use chrono::Utc;
use popevents_core::error::CoreError;
use popevents_core::registration::{
    check_admission, validate_submission, AdmissionSnapshot, SubmissionFields,
    MSG_ALREADY_REGISTERED,
};
use popevents_db::models::event::Event;
use popevents_db::models::registration::{
    CreateRegistration, NewRegistration, Registration, RegistrationWithEvent,
};
use popevents_db::repositories::{EventRepo, RegistrationRepo};
use popevents_mail::RegistrationNotice;

use crate::error::{conflict_on, AppError, AppResult};
use crate::state::AppState;

/// Unique index guarding one registration per (event, email).
const UQ_EVENT_EMAIL: &str = "uq_registrations_event_email";

/// Validate, admit and store a registration, then notify the operators.
pub async fn submit(state: &AppState, input: &CreateRegistration) -> AppResult<RegistrationWithEvent> {
    let submission = validate_submission(&SubmissionFields {
        event_id: input.event_id,
        full_name: input.full_name.as_deref(),
        email: input.email.as_deref(),
        phone: input.phone.as_deref(),
        company_name: input.company_name.as_deref(),
        license_file_url: input.license_file_url.as_deref(),
        additional_notes: input.additional_notes.as_deref(),
    })?;
    let event_id = submission.event_id;

    let mut tx = state.pool.begin().await?;

    let event = EventRepo::lock_for_intake(&mut *tx, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    let snapshot = AdmissionSnapshot {
        is_published: event.is_published,
        starts_at: event.date,
        ends_at: event.end_date,
        max_capacity: event.max_capacity,
        registration_count: RegistrationRepo::count_for_event(&mut *tx, event_id).await?,
        already_registered: RegistrationRepo::exists_for_email(
            &mut *tx,
            event_id,
            &submission.email,
        )
        .await?,
    };
    check_admission(&snapshot, Utc::now())?;

    let new = NewRegistration {
        event_id,
        full_name: submission.full_name,
        email: submission.email,
        phone: submission.phone,
        company_name: submission.company_name,
        license_file_url: submission.license_file_url,
        additional_notes: submission.additional_notes,
    };
    let registration = RegistrationRepo::create(&mut *tx, &new)
        .await
        .map_err(|e| conflict_on(e, UQ_EVENT_EMAIL, MSG_ALREADY_REGISTERED))?;

    tx.commit()
        .await
        .map_err(|e| conflict_on(e, UQ_EVENT_EMAIL, MSG_ALREADY_REGISTERED))?;

    tracing::info!(
        registration_id = registration.id,
        event_id,
        "Registration created"
    );

    notify(state, &registration, &event).await;

    Ok(RegistrationWithEvent {
        registration,
        event,
    })
}

/// Best-effort operator notification. Failures are logged only.
async fn notify(state: &AppState, registration: &Registration, event: &Event) {
    let notice = RegistrationNotice {
        event_title: event.title.clone(),
        full_name: registration.full_name.clone(),
        email: registration.email.clone(),
        phone: registration.phone.clone(),
        company_name: registration.company_name.clone(),
        additional_notes: registration.additional_notes.clone(),
    };

    if let Err(e) = state.notifier.registration_received(&notice).await {
        tracing::warn!(
            registration_id = registration.id,
            error = %e,
            "Failed to send registration notification"
        );
    }
}
