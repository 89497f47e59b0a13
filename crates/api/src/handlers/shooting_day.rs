//! Handlers for shooting days, nested under projects for list/create.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use uwrap_core::error::CoreError;
use uwrap_core::shooting_day::{
    validate_location, validate_sort_order, validate_status, validate_time_of_day,
    validate_title,
};
use uwrap_core::types::DbId;
use uwrap_db::models::shooting_day::{CreateShootingDay, ShootingDay, UpdateShootingDay};
use uwrap_db::repositories::ShootingDayRepo;
use uwrap_events::event_types::SHOOTING_DAY_UPDATED;

use super::{ensure_project_exists, publish_entity_event};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn validate_optional_fields(
    location: Option<&str>,
    call_time: Option<&str>,
    wrap_time: Option<&str>,
    status: Option<&str>,
    sort_order: Option<i32>,
) -> Result<(), CoreError> {
    if let Some(location) = location {
        validate_location(location)?;
    }
    if let Some(call_time) = call_time {
        validate_time_of_day("call_time", call_time)?;
    }
    if let Some(wrap_time) = wrap_time {
        validate_time_of_day("wrap_time", wrap_time)?;
    }
    if let Some(status) = status {
        validate_status(status)?;
    }
    if let Some(sort_order) = sort_order {
        validate_sort_order(sort_order)?;
    }
    Ok(())
}

/// GET /api/projects/{project_id}/shooting-days
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ShootingDay>>> {
    ensure_project_exists(&state, project_id).await?;
    let days = ShootingDayRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(days))
}

/// POST /api/projects/{project_id}/shooting-days
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateShootingDay>,
) -> AppResult<(StatusCode, Json<ShootingDay>)> {
    validate_title(&input.title)?;
    validate_optional_fields(
        input.location.as_deref(),
        input.call_time.as_deref(),
        input.wrap_time.as_deref(),
        input.status.as_deref(),
        input.sort_order,
    )?;
    ensure_project_exists(&state, project_id).await?;

    let day = ShootingDayRepo::create(&state.pool, project_id, &input).await?;
    tracing::info!(shooting_day_id = day.id, project_id, "Shooting day created");
    publish_entity_event(&state, SHOOTING_DAY_UPDATED, project_id, "shooting_day", day.id, &day);
    Ok((StatusCode::CREATED, Json(day)))
}

/// PATCH /api/shooting-days/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShootingDay>,
) -> AppResult<Json<ShootingDay>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    validate_optional_fields(
        input.location.as_ref().and_then(|v| v.as_deref()),
        input.call_time.as_ref().and_then(|v| v.as_deref()),
        input.wrap_time.as_ref().and_then(|v| v.as_deref()),
        input.status.as_deref(),
        input.sort_order,
    )?;

    let day = ShootingDayRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("ShootingDay", id))?;
    tracing::info!(shooting_day_id = id, status = %day.status, "Shooting day updated");
    publish_entity_event(&state, SHOOTING_DAY_UPDATED, day.project_id, "shooting_day", id, &day);
    Ok(Json(day))
}

/// DELETE /api/shooting-days/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let day = ShootingDayRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("ShootingDay", id))?;
    if !ShootingDayRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("ShootingDay", id));
    }
    tracing::info!(shooting_day_id = id, project_id = day.project_id, "Shooting day deleted");
    publish_entity_event(
        &state,
        SHOOTING_DAY_UPDATED,
        day.project_id,
        "shooting_day",
        id,
        &json!({ "id": id, "deleted": true }),
    );
    Ok(StatusCode::NO_CONTENT)
}
