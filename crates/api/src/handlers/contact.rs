//! Handler for the public contact form.

use axum::extract::State;
use axum::Json;
use popevents_core::contact::ContactRequest;
use popevents_mail::ContactMessage;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// POST /api/v1/contact
///
/// Forwards the message to the operators' inbox. Delivery is best effort.
pub async fn submit(
    State(state): State<AppState>,
    AppJson(input): AppJson<ContactRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let request = input.normalized()?;
    let message = ContactMessage {
        name: request.name,
        email: request.email,
        subject: request.subject,
        message: request.message,
    };

    if let Err(e) = state.notifier.contact_submitted(&message).await {
        tracing::warn!(error = %e, "Failed to send contact notification");
    }

    tracing::info!(subject = %message.subject, "Contact form submitted");
    Ok(Json(SuccessResponse::ok()))
}
