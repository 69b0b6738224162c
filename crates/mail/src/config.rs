//! SMTP configuration.

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when neither `SMTP_FROM` nor `SMTP_USER` is set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@popevents.local";

/// Default inbox for operator notifications.
const DEFAULT_NOTIFICATION_EMAIL: &str = "admin@popeventskuwait.com";

/// Configuration for the SMTP notifier.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// Use implicit TLS (port 465 style) instead of STARTTLS.
    pub smtp_secure: bool,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
    /// Address in the "From" header.
    pub from_address: String,
    /// Where operator notifications are delivered.
    pub notification_email: String,
    /// Public site base URL, used for links into the admin area.
    pub site_url: String,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable             | Required | Default                        |
    /// |----------------------|----------|--------------------------------|
    /// | `SMTP_HOST`          | yes      |                                |
    /// | `SMTP_PORT`          | no       | `587`                          |
    /// | `SMTP_SECURE`        | no       | `false`                        |
    /// | `SMTP_USER`          | no       |                                |
    /// | `SMTP_PASSWORD`      | no       |                                |
    /// | `SMTP_FROM`          | no       | `SMTP_USER`, then a local noreply |
    /// | `NOTIFICATION_EMAIL` | no       | `admin@popeventskuwait.com`    |
    pub fn from_env(site_url: &str) -> Option<Self> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let smtp_host = var("SMTP_HOST")?;
        let smtp_user = var("SMTP_USER");
        Some(Self {
            smtp_host,
            smtp_port: var("SMTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            smtp_secure: var("SMTP_SECURE").is_some_and(|v| v.eq_ignore_ascii_case("true")),
            from_address: var("SMTP_FROM")
                .or_else(|| smtp_user.clone())
                .unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user,
            smtp_password: var("SMTP_PASSWORD"),
            notification_email: var("NOTIFICATION_EMAIL")
                .unwrap_or_else(|| DEFAULT_NOTIFICATION_EMAIL.to_string()),
            site_url: site_url.trim_end_matches('/').to_string(),
        })
    }

    /// Link to the admin registrations view.
    pub fn admin_registrations_url(&self) -> String {
        format!("{}/admin/registrations", self.site_url)
    }
}
