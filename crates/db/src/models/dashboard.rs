//! Admin dashboard aggregate.

use serde::Serialize;

use crate::models::registration::RegistrationListItem;

/// Counters and the latest registrations shown on the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_events: i64,
    pub upcoming_events: i64,
    pub total_registrations: i64,
    pub pending_registrations: i64,
    pub recent_registrations: Vec<RegistrationListItem>,
}
