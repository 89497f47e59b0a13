//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uwrap_core::project::{
    validate_description, validate_name, validate_status, DETAIL_ASSET_LIMIT,
};
use uwrap_core::types::DbId;
use uwrap_db::models::asset::Asset;
use uwrap_db::models::organization::Organization;
use uwrap_db::models::project::{CreateProject, Project, ProjectListItem, UpdateProject};
use uwrap_db::models::script::ScriptWithUsers;
use uwrap_db::models::shooting_day::ShootingDay;
use uwrap_db::repositories::{
    AssetRepo, OrganizationRepo, ProjectRepo, ScriptRepo, ShootingDayRepo,
};
use uwrap_events::event_types::PROJECT_UPDATED;

use super::publish_entity_event;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ListProjectsParams {
    pub organization_id: Option<DbId>,
}

/// Project with its organization and child collections.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub organization: Organization,
    pub scripts: Vec<ScriptWithUsers>,
    pub shooting_days: Vec<ShootingDay>,
    pub assets: Vec<Asset>,
}

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListProjectsParams>,
) -> AppResult<Json<Vec<ProjectListItem>>> {
    let rows = ProjectRepo::list_with_counts(&state.pool, params.organization_id).await?;
    Ok(Json(rows.into_iter().map(ProjectListItem::from).collect()))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetail>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    let organization = OrganizationRepo::find_by_id(&state.pool, project.organization_id)
        .await?
        .ok_or(AppError::not_found("Organization", project.organization_id))?;

    let scripts = ScriptRepo::list_by_project(&state.pool, id).await?;
    let shooting_days = ShootingDayRepo::list_by_project(&state.pool, id).await?;
    let assets = AssetRepo::list_recent_by_project(&state.pool, id, DETAIL_ASSET_LIMIT).await?;

    Ok(Json(ProjectDetail {
        project,
        organization,
        scripts,
        shooting_days,
        assets,
    }))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_name(&input.name)?;
    if let Some(description) = &input.description {
        validate_description(description)?;
    }
    if let Some(status) = &input.status {
        validate_status(status)?;
    }
    OrganizationRepo::find_by_id(&state.pool, input.organization_id)
        .await?
        .ok_or(AppError::not_found("Organization", input.organization_id))?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(
        project_id = project.id,
        organization_id = project.organization_id,
        "Project created"
    );
    Ok((StatusCode::CREATED, Json(project)))
}

/// PATCH /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    if let Some(name) = &input.name {
        validate_name(name)?;
    }
    if let Some(Some(description)) = &input.description {
        validate_description(description)?;
    }
    if let Some(status) = &input.status {
        validate_status(status)?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    tracing::info!(project_id = id, status = %project.status, "Project updated");
    publish_entity_event(&state, PROJECT_UPDATED, id, "project", id, &project);
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Project", id))
    }
}
