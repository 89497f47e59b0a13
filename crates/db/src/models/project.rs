//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uwrap_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub organization_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub cover_image: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub created_by_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Project list row with its organization name and child counts.
///
/// Shaped for the wire by converting into [`ProjectListItem`].
#[derive(Debug, Clone, FromRow)]
pub struct ProjectWithCounts {
    #[sqlx(flatten)]
    pub project: Project,
    /// Joined from `organizations.name`.
    pub organization_name: String,
    pub script_count: i64,
    pub shooting_day_count: i64,
    pub asset_count: i64,
}

/// Organization reference embedded in project list entries.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationRef {
    pub id: DbId,
    pub name: String,
}

/// Child entity counts, serialized under `_count`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCounts {
    pub scripts: i64,
    pub shooting_days: i64,
    pub assets: i64,
}

/// Project list entry as returned by `GET /api/projects`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectListItem {
    #[serde(flatten)]
    pub project: Project,
    pub organization: OrganizationRef,
    #[serde(rename = "_count")]
    pub counts: ProjectCounts,
}

impl From<ProjectWithCounts> for ProjectListItem {
    fn from(row: ProjectWithCounts) -> Self {
        let organization = OrganizationRef {
            id: row.project.organization_id,
            name: row.organization_name,
        };
        Self {
            project: row.project,
            organization,
            counts: ProjectCounts {
                scripts: row.script_count,
                shooting_days: row.shooting_day_count,
                assets: row.asset_count,
            },
        }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub organization_id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `IDEA` if omitted.
    pub status: Option<String>,
    pub cover_image: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub created_by_id: Option<DbId>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub description: Option<Option<String>>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub cover_image: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub start_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub end_date: Option<Option<Timestamp>>,
}
