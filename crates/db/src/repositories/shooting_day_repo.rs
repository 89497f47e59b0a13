//! Repository for the `shooting_days` table.

use sqlx::PgPool;
use uwrap_core::shooting_day::STATUS_PLANNED;
use uwrap_core::types::DbId;

use crate::models::shooting_day::{CreateShootingDay, ShootingDay, UpdateShootingDay};

const COLUMNS: &str = "id, project_id, date, title, description, location, call_time, \
    wrap_time, status, sort_order, created_at, updated_at";

/// Provides CRUD operations for shooting days.
pub struct ShootingDayRepo;

impl ShootingDayRepo {
    /// Insert a new shooting day for `project_id`.
    ///
    /// Status defaults to `PLANNED` and sort order to 0.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateShootingDay,
    ) -> Result<ShootingDay, sqlx::Error> {
        let query = format!(
            "INSERT INTO shooting_days
                (project_id, date, title, description, location, call_time,
                 wrap_time, status, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, $9), COALESCE($10, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShootingDay>(&query)
            .bind(project_id)
            .bind(input.date)
            .bind(&input.title)
            .bind(input.description.is_some())
            .bind(input.description.as_deref())
            .bind(input.location.is_some())
            .bind(input.location.as_deref())
            .bind(input.call_time.is_some())
            .bind(input.call_time.as_deref())
            .bind(input.wrap_time.is_some())
            .bind(input.wrap_time.as_deref())
            .bind(&input.status)
            .bind(STATUS_PLANNED)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ShootingDay>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shooting_days WHERE id = $1");
        sqlx::query_as::<_, ShootingDay>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's shooting days in schedule order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ShootingDay>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shooting_days
             WHERE project_id = $1
             ORDER BY sort_order ASC, date ASC, id ASC"
        );
        sqlx::query_as::<_, ShootingDay>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a shooting day. Only non-`None` fields in `input` are applied;
    /// an explicit `null` clears a nullable column.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShootingDay,
    ) -> Result<Option<ShootingDay>, sqlx::Error> {
        let query = format!(
            "UPDATE shooting_days SET
                date = COALESCE($2, date),
                title = COALESCE($3, title),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                location = CASE WHEN $6 THEN $7 ELSE location END,
                call_time = CASE WHEN $8 THEN $9 ELSE call_time END,
                wrap_time = CASE WHEN $10 THEN $11 ELSE wrap_time END,
                status = COALESCE($12, status),
                sort_order = COALESCE($13, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShootingDay>(&query)
            .bind(id)
            .bind(input.date)
            .bind(&input.title)
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|v| v.as_deref()))
            .bind(input.location.is_some())
            .bind(input.location.as_ref().and_then(|v| v.as_deref()))
            .bind(input.call_time.is_some())
            .bind(input.call_time.as_ref().and_then(|v| v.as_deref()))
            .bind(input.wrap_time.is_some())
            .bind(input.wrap_time.as_ref().and_then(|v| v.as_deref()))
            .bind(&input.status)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shooting_days WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
