//! Repository for the `organizations` table.

use sqlx::PgPool;
use uwrap_core::types::DbId;

use crate::models::organization::{CreateOrganization, Organization};

const COLUMNS: &str = "id, name, slug, logo, settings, created_at, updated_at";

/// Provides create/read operations for organizations.
pub struct OrganizationRepo;

impl OrganizationRepo {
    /// Insert a new organization. Fails with a unique violation on a duplicate slug.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrganization,
    ) -> Result<Organization, sqlx::Error> {
        let settings = input
            .settings
            .clone()
            .unwrap_or_else(|| serde_json::json!({}));
        let query = format!(
            "INSERT INTO organizations (name, slug, logo, settings)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.logo)
            .bind(settings)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations WHERE id = $1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all organizations alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Organization>(&query)
            .fetch_all(pool)
            .await
    }
}
