//! Asset entity model and DTOs.
//!
//! The `asset_type` column is exposed as `type` on the wire.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uwrap_core::types::{DbId, Timestamp};

/// A row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub size: i64,
    pub mime_type: String,
    pub metadata: serde_json::Value,
    pub tags: Vec<String>,
    pub uploaded_by_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering an asset that has already been uploaded.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAsset {
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub size: Option<i64>,
    pub mime_type: String,
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub uploaded_by_id: Option<DbId>,
}

/// DTO for updating asset metadata. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAsset {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub description: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
}
