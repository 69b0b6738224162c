//! Handlers for the `/auth` resource (login, current admin).

use axum::extract::State;
use axum::Json;
use popevents_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::auth::ROLE_ADMIN;
use crate::config::AdminCredentials;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// The authenticated administrator.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub email: String,
    pub role: String,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}

/// Check a login attempt against the configured admin.
///
/// The password hash is verified even when the email does not match, so
/// both failure cases take the same time.
fn credentials_match(
    admin: &AdminCredentials,
    email: &str,
    password: &str,
) -> Result<bool, argon2::password_hash::Error> {
    let email_matches = email.trim().eq_ignore_ascii_case(&admin.email);
    let password_valid = verify_password(password, &admin.password_hash)?;
    Ok(email_matches && password_valid)
}

/// POST /api/v1/auth/login
///
/// Authenticate the configured administrator and issue an access token.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let admin = &state.config.admin;

    let valid = credentials_match(admin, &input.email, &input.password)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        tracing::warn!("Failed login attempt");
        return Err(invalid_credentials());
    }

    let jwt = &state.config.jwt;
    let access_token = generate_access_token(&admin.email, ROLE_ADMIN, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(admin = %admin.email, "Admin logged in");

    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer",
        expires_in: jwt.access_token_expiry_mins * 60,
    }))
}

/// GET /api/v1/auth/me
pub async fn me(admin: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        email: admin.email,
        role: admin.role,
    })
}
