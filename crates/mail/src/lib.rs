//! Transactional email for the back office.
//!
//! Handlers talk to a [`Notifier`]. When SMTP is configured the
//! [`SmtpNotifier`] sends HTML mail to the notification inbox; otherwise the
//! [`DisabledNotifier`] logs and drops the message. Callers treat every
//! notification as best effort.

mod config;
mod smtp;
pub mod templates;

use std::sync::Arc;

use async_trait::async_trait;

pub use config::EmailConfig;
pub use smtp::SmtpNotifier;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Details of a newly stored registration.
#[derive(Debug, Clone)]
pub struct RegistrationNotice {
    pub event_title: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: Option<String>,
    pub additional_notes: Option<String>,
}

/// A contact-form submission.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// Outbound notifications to the site operators.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// A registration was accepted.
    async fn registration_received(&self, notice: &RegistrationNotice) -> Result<(), MailError>;

    /// Someone submitted the contact form.
    async fn contact_submitted(&self, message: &ContactMessage) -> Result<(), MailError>;
}

/// Notifier used when SMTP is not configured.
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn registration_received(&self, notice: &RegistrationNotice) -> Result<(), MailError> {
        tracing::warn!(
            event_title = %notice.event_title,
            "SMTP not configured, skipping registration notification"
        );
        Ok(())
    }

    async fn contact_submitted(&self, _message: &ContactMessage) -> Result<(), MailError> {
        tracing::warn!("SMTP not configured, skipping contact notification");
        Ok(())
    }
}

/// Build the notifier for an optional SMTP configuration.
pub fn build_notifier(config: Option<EmailConfig>) -> Result<Arc<dyn Notifier>, MailError> {
    match config {
        Some(config) => Ok(Arc::new(SmtpNotifier::new(config)?)),
        None => Ok(Arc::new(DisabledNotifier)),
    }
}
