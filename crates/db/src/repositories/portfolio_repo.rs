//! Repository for the `portfolio_items` table.

use popevents_core::types::DbId;
use sqlx::PgPool;

use crate::models::portfolio::{
    NewPortfolioItem, PortfolioItem, PortfolioListParams, UpdatePortfolioItem,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, event_name, images, sort_order, is_published, created_at, updated_at";

/// Provides CRUD operations for portfolio items.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// Insert a new portfolio item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewPortfolioItem,
    ) -> Result<PortfolioItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_items
                (title, description, event_name, images, sort_order, is_published)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.event_name)
            .bind(&input.images)
            .bind(input.sort_order)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    /// Find a portfolio item by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_items WHERE id = $1");
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List items by `sort_order` ascending, optionally filtered on publication.
    pub async fn list(
        pool: &PgPool,
        params: &PortfolioListParams,
    ) -> Result<Vec<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio_items
             WHERE ($1::BOOLEAN IS NULL OR is_published = $1)
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(params.published)
            .fetch_all(pool)
            .await
    }

    /// Update a portfolio item. Only supplied fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePortfolioItem,
    ) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolio_items SET
                title = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                event_name = CASE WHEN $5 THEN $6 ELSE event_name END,
                images = COALESCE($7, images),
                sort_order = COALESCE($8, sort_order),
                is_published = COALESCE($9, is_published)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .bind(input.event_name.is_some())
            .bind(input.event_name.clone().flatten())
            .bind(&input.images)
            .bind(input.sort_order)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a portfolio item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolio_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
