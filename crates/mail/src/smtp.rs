//! SMTP delivery via `lettre`.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::EmailConfig;
use crate::templates;
use crate::{ContactMessage, MailError, Notifier, RegistrationNotice};

/// Sends operator notifications over SMTP.
pub struct SmtpNotifier {
    config: EmailConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpNotifier {
    /// Build the transport. No connection is opened until the first send.
    pub fn new(config: EmailConfig) -> Result<Self, MailError> {
        let mut builder = if config.smtp_secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
        }
        .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            config,
        })
    }

    async fn send_html(
        &self,
        sender_name: &str,
        subject: String,
        html: String,
    ) -> Result<(), MailError> {
        let from = Mailbox::new(
            Some(sender_name.to_string()),
            self.config.from_address.parse()?,
        );
        let to = Mailbox::new(None, self.config.notification_email.parse()?);

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html)
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport.send(email).await?;
        Ok(())
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn registration_received(&self, notice: &RegistrationNotice) -> Result<(), MailError> {
        let admin_url = self.config.admin_registrations_url();
        self.send_html(
            "Pop Events",
            templates::registration_subject(notice),
            templates::registration_html(notice, &admin_url),
        )
        .await?;

        tracing::info!(
            to = %self.config.notification_email,
            event_title = %notice.event_title,
            "Registration notification sent"
        );
        Ok(())
    }

    async fn contact_submitted(&self, message: &ContactMessage) -> Result<(), MailError> {
        self.send_html(
            "Pop Events Contact Form",
            templates::contact_subject(message),
            templates::contact_html(message),
        )
        .await?;

        tracing::info!(to = %self.config.notification_email, "Contact notification sent");
        Ok(())
    }
}
