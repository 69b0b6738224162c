//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Methods taking a
//! `&mut PgConnection` are meant to run inside a caller-owned transaction.

pub mod dashboard_repo;
pub mod event_repo;
pub mod portfolio_repo;
pub mod registration_repo;
pub mod settings_repo;

pub use dashboard_repo::DashboardRepo;
pub use event_repo::EventRepo;
pub use portfolio_repo::PortfolioRepo;
pub use registration_repo::RegistrationRepo;
pub use settings_repo::SettingsRepo;
