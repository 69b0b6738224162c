//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO as received from clients
//! - A validated insert struct consumed by the repository
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod dashboard;
pub mod event;
pub mod patch;
pub mod portfolio;
pub mod registration;
pub mod settings;
