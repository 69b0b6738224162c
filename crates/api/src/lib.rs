//! Pop Events API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, the
//! registration intake workflow) so integration tests and the binary
//! entrypoint share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod intake;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
