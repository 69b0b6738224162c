use popevents_storage::StorageConfig;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Public base URL of the site, used for links in emails.
    pub site_url: String,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// The back-office administrator account.
    pub admin: AdminCredentials,
    /// Upload storage backend.
    pub storage: StorageConfig,
}

/// Login credentials for the single administrator.
#[derive(Clone)]
pub struct AdminCredentials {
    pub email: String,
    /// Argon2id PHC string, produced by `popevents-hash-password`.
    pub password_hash: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

impl AdminCredentials {
    /// # Panics
    ///
    /// Panics if `ADMIN_EMAIL` or `ADMIN_PASSWORD_HASH` is missing or empty.
    pub fn from_env() -> Self {
        let email = std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set in the environment");
        assert!(!email.trim().is_empty(), "ADMIN_EMAIL must not be empty");

        let password_hash = std::env::var("ADMIN_PASSWORD_HASH")
            .expect("ADMIN_PASSWORD_HASH must be set in the environment");
        assert!(
            password_hash.starts_with("$argon2"),
            "ADMIN_PASSWORD_HASH must be an Argon2 PHC string (see popevents-hash-password)"
        );

        Self {
            email: email.trim().to_string(),
            password_hash,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SITE_URL`             | `http://localhost:3000`    |
    ///
    /// JWT, admin and storage settings are read by their own `from_env`.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let site_url = std::env::var("SITE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string();

        let storage = StorageConfig::from_env(&site_url);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            admin: AdminCredentials::from_env(),
            storage,
            site_url,
        }
    }
}
