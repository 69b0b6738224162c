//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use popevents_core::error::CoreError;

use crate::auth::jwt::{validate_token, JwtConfig};
use crate::auth::ROLE_ADMIN;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated administrator extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Add it as a handler parameter to make the route admin-only:
///
/// ```ignore
/// async fn my_handler(admin: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(admin = %admin.email, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The admin's email (from `claims.sub`).
    pub email: String,
    pub role: String,
}

impl AuthUser {
    /// Authenticate from raw request headers.
    ///
    /// Used directly by handlers whose auth requirement depends on the
    /// request body.
    pub fn from_headers(headers: &HeaderMap, jwt: &JwtConfig) -> Result<Self, AppError> {
        let auth_header = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        if claims.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Admin access required".into(),
            )));
        }

        Ok(AuthUser {
            email: claims.sub,
            role: claims.role,
        })
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers, &state.config.jwt)
    }
}
