//! Repository for the `projects` table.

use sqlx::PgPool;
use uwrap_core::project::DEFAULT_STATUS;
use uwrap_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectWithCounts, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, organization_id, name, description, status, cover_image, \
    start_date, end_date, created_by_id, created_at, updated_at";

/// `COLUMNS` qualified with the `p.` alias for joined queries.
const P_COLUMNS: &str = "p.id, p.organization_id, p.name, p.description, p.status, \
    p.cover_image, p.start_date, p.end_date, p.created_by_id, p.created_at, p.updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `IDEA`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (organization_id, name, description, status, cover_image,
                 start_date, end_date, created_by_id)
             VALUES ($1, $2, $3, COALESCE($4, $5), $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.organization_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.status)
            .bind(DEFAULT_STATUS)
            .bind(&input.cover_image)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.created_by_id)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects, most recently updated first, with organization name
    /// and script / shooting day / asset counts.
    ///
    /// When `organization_id` is `Some`, only that organization's projects
    /// are returned.
    pub async fn list_with_counts(
        pool: &PgPool,
        organization_id: Option<DbId>,
    ) -> Result<Vec<ProjectWithCounts>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS},
                o.name AS organization_name,
                (SELECT COUNT(*) FROM scripts s WHERE s.project_id = p.id) AS script_count,
                (SELECT COUNT(*) FROM shooting_days d WHERE d.project_id = p.id) AS shooting_day_count,
                (SELECT COUNT(*) FROM assets a WHERE a.project_id = p.id) AS asset_count
             FROM projects p
             JOIN organizations o ON o.id = p.organization_id
             WHERE ($1::BIGINT IS NULL OR p.organization_id = $1)
             ORDER BY p.updated_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, ProjectWithCounts>(&query)
            .bind(organization_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Nullable columns take a "provided" flag with the value so an explicit
    /// `null` clears them. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                status = COALESCE($5, status),
                cover_image = CASE WHEN $6 THEN $7 ELSE cover_image END,
                start_date = CASE WHEN $8 THEN $9 ELSE start_date END,
                end_date = CASE WHEN $10 THEN $11 ELSE end_date END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|v| v.as_deref()))
            .bind(&input.status)
            .bind(input.cover_image.is_some())
            .bind(input.cover_image.as_ref().and_then(|v| v.as_deref()))
            .bind(input.start_date.is_some())
            .bind(input.start_date.flatten())
            .bind(input.end_date.is_some())
            .bind(input.end_date.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Scripts (with their versions), shooting days and assets are removed
    /// by `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
