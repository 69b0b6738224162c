#![allow(dead_code)]

use std::sync::{Arc, Mutex, OnceLock};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use bytes::Bytes;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use popevents_api::auth::jwt::JwtConfig;
use popevents_api::auth::password::hash_password;
use popevents_api::config::{AdminCredentials, ServerConfig};
use popevents_api::router::build_app_router;
use popevents_api::state::AppState;
use popevents_mail::{ContactMessage, MailError, Notifier, RegistrationNotice};
use popevents_storage::{LocalStorageConfig, ObjectStore, StorageConfig};

pub const ADMIN_EMAIL: &str = "admin@popevents.test";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const PUBLIC_BASE_URL: &str = "https://cdn.popevents.test";

/// Hashing is slow; compute the admin hash once per test binary.
fn admin_password_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password(ADMIN_PASSWORD).unwrap())
        .clone()
}

/// Build a test `ServerConfig` with safe defaults and a known admin account.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        site_url: "http://localhost:3000".to_string(),
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            access_token_expiry_mins: 60,
        },
        admin: AdminCredentials {
            email: ADMIN_EMAIL.to_string(),
            password_hash: admin_password_hash(),
        },
        storage: StorageConfig::Local(LocalStorageConfig {
            dir: std::env::temp_dir()
                .join("popevents-test-uploads")
                .to_string_lossy()
                .into_owned(),
            public_url: "http://localhost:3000/uploads".to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// Object store that keeps uploads in memory.
#[derive(Default)]
pub struct RecordingStore {
    pub objects: Mutex<Vec<(String, String, usize)>>,
}

impl RecordingStore {
    /// `(key, content_type, size)` of every stored object.
    pub fn stored(&self) -> Vec<(String, String, usize)> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn put(
        &self,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> popevents_storage::Result<String> {
        self.objects
            .lock()
            .unwrap()
            .push((key.to_string(), content_type.to_string(), body.len()));
        Ok(format!("{PUBLIC_BASE_URL}/{key}"))
    }
}

/// Notifier that records what it was asked to send.
#[derive(Default)]
pub struct RecordingNotifier {
    pub registrations: Mutex<Vec<RegistrationNotice>>,
    pub contacts: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn registration_received(&self, notice: &RegistrationNotice) -> Result<(), MailError> {
        self.registrations.lock().unwrap().push(notice.clone());
        Ok(())
    }

    async fn contact_submitted(&self, message: &ContactMessage) -> Result<(), MailError> {
        self.contacts.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Notifier whose every delivery fails.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn registration_received(&self, _notice: &RegistrationNotice) -> Result<(), MailError> {
        Err(MailError::Build("smtp unavailable".into()))
    }

    async fn contact_submitted(&self, _message: &ContactMessage) -> Result<(), MailError> {
        Err(MailError::Build("smtp unavailable".into()))
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build the full application router around the given fakes.
pub fn build_test_app_with(
    pool: PgPool,
    store: Arc<dyn ObjectStore>,
    notifier: Arc<dyn Notifier>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store,
        notifier,
    };
    build_app_router(state, &config)
}

/// Build the full application router with in-memory storage and mail.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(
        pool,
        Arc::new(RecordingStore::default()),
        Arc::new(RecordingNotifier::default()),
    )
}

/// Issue an admin access token signed with the test secret.
pub fn admin_token() -> String {
    popevents_api::auth::jwt::generate_access_token(
        ADMIN_EMAIL,
        popevents_api::auth::ROLE_ADMIN,
        &test_config().jwt,
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Read the response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub const MULTIPART_BOUNDARY: &str = "popevents-test-boundary";

/// Encode a multipart body with an optional `folder` field and one file part.
pub fn multipart_body(
    folder: Option<&str>,
    file_name: &str,
    content_type: &str,
    data: &[u8],
) -> Vec<u8> {
    let mut body = Vec::new();
    if let Some(folder) = folder {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"folder\"\r\n\r\n{folder}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(
        format!(
            "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// POST a multipart body to `/api/v1/upload`.
pub async fn post_upload(app: Router, body: Vec<u8>, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create an event through the API and return its JSON.
pub async fn create_event(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/events", body, &admin_token()).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}

/// A valid event body dated `days_from_now` days ahead.
pub fn event_body(title: &str, days_from_now: i64) -> serde_json::Value {
    let date = chrono::Utc::now() + chrono::Duration::days(days_from_now);
    serde_json::json!({
        "title": title,
        "description": "Pop-up market with local makers",
        "date": date.to_rfc3339(),
        "location": "Kuwait City",
        "cover_image": "https://cdn.popevents.test/events/cover.jpg",
    })
}
