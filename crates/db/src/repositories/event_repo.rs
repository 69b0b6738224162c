//! Repository for the `events` table.

use popevents_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::event::{Event, EventListParams, EventWithCount, NewEvent, UpdateEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, title, description, date, end_date, location, map_url, \
     cover_image, is_upcoming, is_published, max_capacity, created_at, updated_at";

/// Event columns qualified with the `e` alias plus the live registration count.
const COLUMNS_WITH_COUNT: &str = "e.id, e.slug, e.title, e.description, e.date, e.end_date, \
     e.location, e.map_url, e.cover_image, e.is_upcoming, e.is_published, e.max_capacity, \
     e.created_at, e.updated_at, \
     (SELECT COUNT(*) FROM registrations r WHERE r.event_id = e.id) AS registration_count";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events
                (slug, title, description, date, end_date, location, map_url,
                 cover_image, is_upcoming, is_published, max_capacity)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.date)
            .bind(input.end_date)
            .bind(&input.location)
            .bind(&input.map_url)
            .bind(&input.cover_image)
            .bind(input.is_upcoming)
            .bind(input.is_published)
            .bind(input.max_capacity)
            .fetch_one(pool)
            .await
    }

    /// Find an event by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an event by ID together with its registration count.
    pub async fn find_with_count(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EventWithCount>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS_WITH_COUNT} FROM events e WHERE e.id = $1");
        sqlx::query_as::<_, EventWithCount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an event by slug together with its registration count.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<EventWithCount>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS_WITH_COUNT} FROM events e WHERE e.slug = $1");
        sqlx::query_as::<_, EventWithCount>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List events ordered by date ascending, optionally filtered on the
    /// upcoming and published flags.
    pub async fn list(
        pool: &PgPool,
        params: &EventListParams,
    ) -> Result<Vec<EventWithCount>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS_WITH_COUNT} FROM events e
             WHERE ($1::BOOLEAN IS NULL OR e.is_upcoming = $1)
               AND ($2::BOOLEAN IS NULL OR e.is_published = $2)
             ORDER BY e.date ASC, e.id ASC"
        );
        sqlx::query_as::<_, EventWithCount>(&query)
            .bind(params.upcoming)
            .bind(params.published)
            .fetch_all(pool)
            .await
    }

    /// Update an event. Only supplied fields are applied; the clearable
    /// columns use a "was supplied" flag so `null` can reset them.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                date = COALESCE($5, date),
                end_date = CASE WHEN $6 THEN $7 ELSE end_date END,
                location = COALESCE($8, location),
                map_url = CASE WHEN $9 THEN $10 ELSE map_url END,
                cover_image = COALESCE($11, cover_image),
                is_upcoming = COALESCE($12, is_upcoming),
                is_published = COALESCE($13, is_published),
                max_capacity = CASE WHEN $14 THEN $15 ELSE max_capacity END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(input.date)
            .bind(input.end_date.is_some())
            .bind(input.end_date.flatten())
            .bind(&input.location)
            .bind(input.map_url.is_some())
            .bind(input.map_url.clone().flatten())
            .bind(&input.cover_image)
            .bind(input.is_upcoming)
            .bind(input.is_published)
            .bind(input.max_capacity.is_some())
            .bind(input.max_capacity.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Lock an event row for the rest of the enclosing transaction.
    ///
    /// Concurrent intakes for the same event queue here, which keeps the
    /// capacity count and duplicate check consistent with the insert.
    pub async fn lock_for_intake(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Delete an event and its registrations in one transaction.
    /// Returns `true` if the event existed.
    pub async fn delete_with_registrations(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM registrations WHERE event_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
