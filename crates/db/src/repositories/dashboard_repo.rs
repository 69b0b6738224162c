//! Read-only aggregates for the admin dashboard.

use popevents_core::registration::STATUS_PENDING;
use sqlx::{FromRow, PgPool};

use crate::models::dashboard::DashboardStats;
use crate::models::registration::RegistrationListParams;
use crate::repositories::RegistrationRepo;

/// Number of registrations shown in the dashboard's recent list.
pub const RECENT_REGISTRATIONS_LIMIT: i64 = 10;

#[derive(FromRow)]
struct Counts {
    total_events: i64,
    upcoming_events: i64,
    total_registrations: i64,
    pending_registrations: i64,
}

/// Provides the dashboard summary query.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Gather counters and the most recent registrations.
    pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        let counts = sqlx::query_as::<_, Counts>(
            "SELECT
                (SELECT COUNT(*) FROM events) AS total_events,
                (SELECT COUNT(*) FROM events WHERE is_upcoming) AS upcoming_events,
                (SELECT COUNT(*) FROM registrations) AS total_registrations,
                (SELECT COUNT(*) FROM registrations WHERE status = $1) AS pending_registrations",
        )
        .bind(STATUS_PENDING)
        .fetch_one(pool)
        .await?;

        let recent_registrations = RegistrationRepo::list(
            pool,
            &RegistrationListParams {
                limit: Some(RECENT_REGISTRATIONS_LIMIT),
                ..Default::default()
            },
        )
        .await?;

        Ok(DashboardStats {
            total_events: counts.total_events,
            upcoming_events: counts.upcoming_events,
            total_registrations: counts.total_registrations,
            pending_registrations: counts.pending_registrations,
            recent_registrations,
        })
    }
}
