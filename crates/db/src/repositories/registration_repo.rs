//! Repository for the `registrations` table.

use popevents_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::registration::{
    NewRegistration, Registration, RegistrationListItem, RegistrationListParams,
    RegistrationWithEvent,
};
use crate::repositories::EventRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_id, full_name, email, phone, company_name, \
     license_file_url, additional_notes, status, created_at, updated_at";

/// Registration columns joined with the aliased event summary columns.
/// `event_id` is shared by both halves of [`RegistrationListItem`].
const LIST_COLUMNS: &str = "r.id, r.event_id, r.full_name, r.email, r.phone, r.company_name, \
     r.license_file_url, r.additional_notes, r.status, r.created_at, r.updated_at, \
     e.title AS event_title, e.date AS event_date, e.location AS event_location";

/// Provides intake, listing and status operations for registrations.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Count the registrations held by an event.
    pub async fn count_for_event(
        conn: &mut PgConnection,
        event_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(conn)
            .await
    }

    /// Whether the email (case-insensitive) is already registered for the event.
    pub async fn exists_for_email(
        conn: &mut PgConnection,
        event_id: DbId,
        email: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM registrations
                WHERE event_id = $1 AND LOWER(email) = LOWER($2)
             )",
        )
        .bind(event_id)
        .bind(email)
        .fetch_one(conn)
        .await
    }

    /// Insert a pending registration, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        input: &NewRegistration,
    ) -> Result<Registration, sqlx::Error> {
        let query = format!(
            "INSERT INTO registrations
                (event_id, full_name, email, phone, company_name,
                 license_file_url, additional_notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(input.event_id)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company_name)
            .bind(&input.license_file_url)
            .bind(&input.additional_notes)
            .fetch_one(conn)
            .await
    }

    /// Find a registration by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Registration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM registrations WHERE id = $1");
        sqlx::query_as::<_, Registration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a registration by ID and attach its full event.
    pub async fn find_with_event(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RegistrationWithEvent>, sqlx::Error> {
        let Some(registration) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let event = EventRepo::find_by_id(pool, registration.event_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        Ok(Some(RegistrationWithEvent {
            registration,
            event,
        }))
    }

    /// List registrations newest first with their event summary.
    ///
    /// `event_id` and `status` filter when present; `limit` caps the row
    /// count (`LIMIT NULL` returns everything).
    pub async fn list(
        pool: &PgPool,
        params: &RegistrationListParams,
    ) -> Result<Vec<RegistrationListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {LIST_COLUMNS}
             FROM registrations r
             JOIN events e ON e.id = r.event_id
             WHERE ($1::BIGINT IS NULL OR r.event_id = $1)
               AND ($2::TEXT IS NULL OR r.status = $2)
             ORDER BY r.created_at DESC, r.id DESC
             LIMIT $3"
        );
        sqlx::query_as::<_, RegistrationListItem>(&query)
            .bind(params.event_id)
            .bind(&params.status)
            .bind(params.limit)
            .fetch_all(pool)
            .await
    }

    /// Set the status of a registration. Returns `None` if the ID is unknown.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Registration>, sqlx::Error> {
        let query = format!(
            "UPDATE registrations SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a registration by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
