//! Request extractors guarding admin routes.
//!
//! - [`auth::AuthUser`] -- The authenticated administrator, from a JWT Bearer token.

pub mod auth;
