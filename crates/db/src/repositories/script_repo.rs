//! Repository for the `scripts` table.
//!
//! Content edits go through [`ScriptRepo::update`], which snapshots the
//! pre-update state into `script_versions` and bumps the live version in
//! one transaction.

use sqlx::PgPool;
use uwrap_core::script::{next_version, INITIAL_VERSION};
use uwrap_core::types::DbId;

use crate::models::script::{CreateScript, Script, ScriptWithUsers, UpdateScript};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, content, version, is_locked, locked_by_id, \
    locked_at, created_by_id, created_at, updated_at";

/// `COLUMNS` qualified with the `s.` alias for joined queries.
const S_COLUMNS: &str = "s.id, s.project_id, s.title, s.content, s.version, s.is_locked, \
    s.locked_by_id, s.locked_at, s.created_by_id, s.created_at, s.updated_at";

/// Provides CRUD, versioning and lock operations for scripts.
pub struct ScriptRepo;

impl ScriptRepo {
    /// Insert a new script at version 1. Content defaults to the empty document.
    pub async fn create(pool: &PgPool, input: &CreateScript) -> Result<Script, sqlx::Error> {
        let query = format!(
            "INSERT INTO scripts (project_id, title, content, version, created_by_id)
             VALUES ($1, $2, COALESCE($3, ''), $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Script>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(INITIAL_VERSION)
            .bind(input.created_by_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Script>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scripts WHERE id = $1");
        sqlx::query_as::<_, Script>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's scripts, most recently updated first, with the
    /// creator and lock holder names.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ScriptWithUsers>, sqlx::Error> {
        let query = format!(
            "SELECT {S_COLUMNS},
                creator.name AS created_by_name,
                locker.name AS locked_by_name
             FROM scripts s
             LEFT JOIN users creator ON creator.id = s.created_by_id
             LEFT JOIN users locker ON locker.id = s.locked_by_id
             WHERE s.project_id = $1
             ORDER BY s.updated_at DESC, s.id DESC"
        );
        sqlx::query_as::<_, ScriptWithUsers>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a script. Only non-`None` fields in `input` are applied.
    ///
    /// When `input.content` is non-empty and the script exists, the current
    /// title/content are first written to `script_versions` tagged with the
    /// current version, and the live row moves to the next version. The
    /// live row is locked (`FOR UPDATE`) for the whole read-snapshot-write
    /// sequence so concurrent editors serialize instead of producing
    /// duplicate version numbers.
    ///
    /// An empty `content` string is written as-is but does not snapshot or
    /// bump the version.
    ///
    /// Returns `None` if no row with the given `id` exists; no snapshot is
    /// written in that case.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateScript,
    ) -> Result<Option<Script>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let mut bumped_version: Option<i32> = None;
        if input.edits_content() {
            let current: Option<(String, String, i32)> = sqlx::query_as(
                "SELECT title, content, version FROM scripts WHERE id = $1 FOR UPDATE",
            )
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

            if let Some((title, content, version)) = current {
                sqlx::query(
                    "INSERT INTO script_versions
                        (script_id, version, title, content, change_description, created_by_id)
                     VALUES ($1, $2, $3, $4, $5, $6)",
                )
                .bind(id)
                .bind(version)
                .bind(&title)
                .bind(&content)
                .bind(&input.change_description)
                .bind(input.updated_by_id)
                .execute(&mut *tx)
                .await?;

                bumped_version = Some(next_version(version));
            }
        }

        let query = format!(
            "UPDATE scripts SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                version = COALESCE($4, version)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Script>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(bumped_version)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;

        if let Some(version) = bumped_version {
            tracing::debug!(script_id = id, version, "Script content versioned");
        }
        Ok(updated)
    }

    /// Mark a script as locked by `user_id`.
    ///
    /// Unconditional: an existing lock held by another user is overwritten
    /// (last caller wins). Returns `None` if the script does not exist.
    pub async fn lock(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Script>, sqlx::Error> {
        let query = format!(
            "UPDATE scripts SET is_locked = true, locked_by_id = $2, locked_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Script>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Clear the lock flag, holder and timestamp. No ownership check.
    ///
    /// Returns `None` if the script does not exist.
    pub async fn unlock(pool: &PgPool, id: DbId) -> Result<Option<Script>, sqlx::Error> {
        let query = format!(
            "UPDATE scripts SET is_locked = false, locked_by_id = NULL, locked_at = NULL
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Script>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a script and its versions. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scripts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
