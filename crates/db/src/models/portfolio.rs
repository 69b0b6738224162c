//! Portfolio item model and DTOs.

use popevents_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::patch::double_option;

/// A row from the `portfolio_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioItem {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub event_name: Option<String>,
    pub images: Vec<String>,
    pub sort_order: i32,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a portfolio item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePortfolioItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_name: Option<String>,
    pub images: Option<Vec<String>>,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
    /// Defaults to `true` if omitted.
    pub is_published: Option<bool>,
}

/// A validated portfolio item ready for insertion.
#[derive(Debug, Clone)]
pub struct NewPortfolioItem {
    pub title: String,
    pub description: Option<String>,
    pub event_name: Option<String>,
    pub images: Vec<String>,
    pub sort_order: i32,
    pub is_published: bool,
}

/// DTO for updating a portfolio item. `description` and `event_name`
/// accept an explicit `null` to clear.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePortfolioItem {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub event_name: Option<Option<String>>,
    pub images: Option<Vec<String>>,
    pub sort_order: Option<i32>,
    pub is_published: Option<bool>,
}

/// Query parameters for `GET /portfolio`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioListParams {
    pub published: Option<bool>,
}
