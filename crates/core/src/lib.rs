//! Domain rules for the Pop Events back office.
//!
//! Pure functions and constants only: no database, network or filesystem
//! access. The `db`, `storage`, `mail` and `api` crates build on top of this.

pub mod contact;
pub mod error;
pub mod event;
pub mod portfolio;
pub mod registration;
pub mod settings;
pub mod slug;
pub mod types;
pub mod upload;
pub mod validation;
