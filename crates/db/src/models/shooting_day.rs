//! Shooting day entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uwrap_core::types::{DbId, Timestamp};

/// A row from the `shooting_days` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShootingDay {
    pub id: DbId,
    pub project_id: DbId,
    pub date: Timestamp,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub call_time: Option<String>,
    pub wrap_time: Option<String>,
    pub status: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a shooting day. `project_id` comes from the URL.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShootingDay {
    pub date: Timestamp,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub call_time: Option<String>,
    pub wrap_time: Option<String>,
    /// Defaults to `PLANNED` if omitted.
    pub status: Option<String>,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
}

/// DTO for updating a shooting day. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateShootingDay {
    pub date: Option<Timestamp>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub call_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub wrap_time: Option<Option<String>>,
    pub status: Option<String>,
    pub sort_order: Option<i32>,
}
