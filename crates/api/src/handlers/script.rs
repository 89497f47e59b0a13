//! Handlers for the `/scripts` resource, including versioning and the
//! advisory edit lock.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uwrap_core::pagination::clamp_limit;
use uwrap_core::script::{validate_change_description, validate_title, DETAIL_VERSION_LIMIT};
use uwrap_core::types::DbId;
use uwrap_db::models::script::{
    CreateScript, LockScriptRequest, Script, ScriptVersion, ScriptWithUsers, UpdateScript,
};
use uwrap_db::repositories::{ScriptRepo, ScriptVersionRepo};
use uwrap_events::event_types::{
    SCRIPT_CREATED, SCRIPT_DELETED, SCRIPT_LOCKED, SCRIPT_UNLOCKED, SCRIPT_UPDATED,
};
use uwrap_events::PlatformEvent;

use super::{ensure_project_exists, publish_entity_event};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Script with its most recent version snapshots, newest first.
#[derive(Debug, Serialize)]
pub struct ScriptDetail {
    #[serde(flatten)]
    pub script: Script,
    pub versions: Vec<ScriptVersion>,
}

/// Query parameters for `GET /scripts/{id}/versions`.
#[derive(Debug, Deserialize)]
pub struct VersionListParams {
    pub limit: Option<i64>,
}

async fn find_script(state: &AppState, id: DbId) -> AppResult<Script> {
    ScriptRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Script", id))
}

/// GET /api/scripts/project/{project_id}
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ScriptWithUsers>>> {
    ensure_project_exists(&state, project_id).await?;
    let scripts = ScriptRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(scripts))
}

/// GET /api/scripts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ScriptDetail>> {
    let script = find_script(&state, id).await?;
    let versions = ScriptVersionRepo::list_for_script(&state.pool, id, DETAIL_VERSION_LIMIT).await?;
    Ok(Json(ScriptDetail { script, versions }))
}

/// GET /api/scripts/{id}/versions
pub async fn list_versions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<VersionListParams>,
) -> AppResult<Json<Vec<ScriptVersion>>> {
    find_script(&state, id).await?;
    let versions =
        ScriptVersionRepo::list_for_script(&state.pool, id, clamp_limit(params.limit)).await?;
    Ok(Json(versions))
}

/// POST /api/scripts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateScript>,
) -> AppResult<(StatusCode, Json<Script>)> {
    validate_title(&input.title)?;
    ensure_project_exists(&state, input.project_id).await?;

    let script = ScriptRepo::create(&state.pool, &input).await?;
    tracing::info!(script_id = script.id, project_id = script.project_id, "Script created");
    publish_entity_event(
        &state,
        SCRIPT_CREATED,
        script.project_id,
        "script",
        script.id,
        &script,
    );
    Ok((StatusCode::CREATED, Json(script)))
}

/// PATCH /api/scripts/{id}
///
/// A body carrying non-empty `content` snapshots the previous title/content
/// and bumps the version by one.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateScript>,
) -> AppResult<Json<Script>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(description) = &input.change_description {
        validate_change_description(description)?;
    }

    let script = ScriptRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Script", id))?;
    tracing::info!(
        script_id = id,
        version = script.version,
        content_changed = input.edits_content(),
        "Script updated"
    );
    publish_entity_event(&state, SCRIPT_UPDATED, script.project_id, "script", id, &script);
    Ok(Json(script))
}

/// POST /api/scripts/{id}/lock
///
/// Advisory only: any caller may take the lock, the latest caller wins.
pub async fn lock(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<LockScriptRequest>,
) -> AppResult<Json<Script>> {
    let script = ScriptRepo::lock(&state.pool, id, input.user_id)
        .await?
        .ok_or(AppError::not_found("Script", id))?;
    tracing::info!(script_id = id, user_id = input.user_id, "Script locked");
    state.event_bus.publish(
        PlatformEvent::new(SCRIPT_LOCKED)
            .with_project(script.project_id)
            .with_entity("script", id)
            .with_actor(input.user_id)
            .with_payload(serde_json::to_value(&script).unwrap_or_default()),
    );
    Ok(Json(script))
}

/// POST /api/scripts/{id}/unlock
pub async fn unlock(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Script>> {
    let script = ScriptRepo::unlock(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Script", id))?;
    tracing::info!(script_id = id, "Script unlocked");
    publish_entity_event(&state, SCRIPT_UNLOCKED, script.project_id, "script", id, &script);
    Ok(Json(script))
}

/// DELETE /api/scripts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let script = find_script(&state, id).await?;
    if !ScriptRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Script", id));
    }
    tracing::info!(script_id = id, project_id = script.project_id, "Script deleted");
    publish_entity_event(
        &state,
        SCRIPT_DELETED,
        script.project_id,
        "script",
        id,
        &json!({ "id": id }),
    );
    Ok(StatusCode::NO_CONTENT)
}
