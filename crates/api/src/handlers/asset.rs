//! Handlers for the `/assets` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use uwrap_core::asset::{
    validate_description, validate_name, validate_size, validate_tags, validate_type,
};
use uwrap_core::types::DbId;
use uwrap_db::models::asset::{Asset, CreateAsset, UpdateAsset};
use uwrap_db::repositories::AssetRepo;
use uwrap_events::event_types::{ASSET_CREATED, ASSET_DELETED};

use super::{ensure_project_exists, publish_entity_event};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /assets/project/{project_id}`.
#[derive(Debug, Deserialize)]
pub struct AssetListParams {
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
}

/// GET /api/assets/project/{project_id}[?type=]
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(params): Query<AssetListParams>,
) -> AppResult<Json<Vec<Asset>>> {
    if let Some(asset_type) = &params.asset_type {
        validate_type(asset_type)?;
    }
    ensure_project_exists(&state, project_id).await?;
    let assets =
        AssetRepo::list_by_project(&state.pool, project_id, params.asset_type.as_deref()).await?;
    Ok(Json(assets))
}

/// GET /api/assets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Asset>> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Asset", id))?;
    Ok(Json(asset))
}

/// POST /api/assets
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<Asset>)> {
    validate_name(&input.name)?;
    validate_type(&input.asset_type)?;
    if let Some(description) = &input.description {
        validate_description(description)?;
    }
    if let Some(size) = input.size {
        validate_size(size)?;
    }
    validate_tags(&input.tags)?;
    ensure_project_exists(&state, input.project_id).await?;

    let asset = AssetRepo::create(&state.pool, &input).await?;
    tracing::info!(
        asset_id = asset.id,
        project_id = asset.project_id,
        asset_type = %asset.asset_type,
        "Asset created"
    );
    publish_entity_event(&state, ASSET_CREATED, asset.project_id, "asset", asset.id, &asset);
    Ok((StatusCode::CREATED, Json(asset)))
}

/// PATCH /api/assets/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<Json<Asset>> {
    if let Some(name) = &input.name {
        validate_name(name)?;
    }
    if let Some(Some(description)) = &input.description {
        validate_description(description)?;
    }
    if let Some(tags) = &input.tags {
        validate_tags(tags)?;
    }

    let asset = AssetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Asset", id))?;
    tracing::info!(asset_id = id, "Asset updated");
    Ok(Json(asset))
}

/// DELETE /api/assets/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Asset", id))?;
    if !AssetRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Asset", id));
    }
    tracing::info!(asset_id = id, project_id = asset.project_id, "Asset deleted");
    publish_entity_event(
        &state,
        ASSET_DELETED,
        asset.project_id,
        "asset",
        id,
        &json!({ "id": id }),
    );
    Ok(StatusCode::NO_CONTENT)
}
