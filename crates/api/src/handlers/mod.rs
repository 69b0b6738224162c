pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod events;
pub mod portfolio;
pub mod registrations;
pub mod settings;
pub mod upload;
