//! Repository for the `assets` table.

use sqlx::PgPool;
use uwrap_core::types::DbId;

use crate::models::asset::{Asset, CreateAsset, UpdateAsset};

/// Column list for `assets` queries.
const COLUMNS: &str = "\
    id, project_id, name, description, asset_type, url, thumbnail_url, \
    size, mime_type, metadata, tags, uploaded_by_id, created_at, updated_at";

/// Provides CRUD operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Register an already-uploaded asset.
    pub async fn create(pool: &PgPool, input: &CreateAsset) -> Result<Asset, sqlx::Error> {
        let metadata = input
            .metadata
            .clone()
            .unwrap_or_else(|| serde_json::json!({}));

        let query = format!(
            "INSERT INTO assets (\
                project_id, name, description, asset_type, url, thumbnail_url, \
                size, mime_type, metadata, tags, uploaded_by_id\
             ) VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 0), $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.asset_type)
            .bind(&input.url)
            .bind(&input.thumbnail_url)
            .bind(input.size)
            .bind(&input.mime_type)
            .bind(metadata)
            .bind(&input.tags)
            .bind(input.uploaded_by_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's assets, newest first.
    ///
    /// When `asset_type` is `Some`, only assets of that type are returned.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
        asset_type: Option<&str>,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assets \
             WHERE project_id = $1 AND ($2::TEXT IS NULL OR asset_type = $2) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(project_id)
            .bind(asset_type)
            .fetch_all(pool)
            .await
    }

    /// The `limit` newest assets of a project.
    pub async fn list_recent_by_project(
        pool: &PgPool,
        project_id: DbId,
        limit: i64,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assets \
             WHERE project_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(project_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update asset metadata. Only non-`None` fields in `input` are applied;
    /// an explicit `null` description clears it.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET \
                name = COALESCE($2, name), \
                description = CASE WHEN $3 THEN $4 ELSE description END, \
                tags = COALESCE($5, tags) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|v| v.as_deref()))
            .bind(&input.tags)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
