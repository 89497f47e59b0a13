//! Repository for the `script_versions` table.
//!
//! Rows are written by [`ScriptRepo::update`](super::ScriptRepo::update);
//! this repository only reads them.

use sqlx::PgPool;
use uwrap_core::types::DbId;

use crate::models::script::ScriptVersion;

const COLUMNS: &str =
    "id, script_id, version, title, content, change_description, created_by_id, created_at";

/// Read access to script version snapshots.
pub struct ScriptVersionRepo;

impl ScriptVersionRepo {
    /// List a script's versions, newest first, capped at `limit` rows.
    pub async fn list_for_script(
        pool: &PgPool,
        script_id: DbId,
        limit: i64,
    ) -> Result<Vec<ScriptVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM script_versions
             WHERE script_id = $1
             ORDER BY version DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, ScriptVersion>(&query)
            .bind(script_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find a specific snapshot by script and version number.
    pub async fn find_by_script_and_version(
        pool: &PgPool,
        script_id: DbId,
        version: i32,
    ) -> Result<Option<ScriptVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM script_versions WHERE script_id = $1 AND version = $2"
        );
        sqlx::query_as::<_, ScriptVersion>(&query)
            .bind(script_id)
            .bind(version)
            .fetch_optional(pool)
            .await
    }

    pub async fn count_for_script(pool: &PgPool, script_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM script_versions WHERE script_id = $1")
            .bind(script_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
