//! Handlers for user notifications.
//!
//! Creating a notification persists it and pushes it to the recipient's
//! `user:{id}` WebSocket room.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uwrap_core::notification::{validate_message, validate_title, validate_type};
use uwrap_core::pagination::{clamp_limit, clamp_offset};
use uwrap_core::types::DbId;
use uwrap_db::models::notification::{CreateNotification, Notification};
use uwrap_db::repositories::{NotificationRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for listing a user's notifications.
#[derive(Debug, Deserialize)]
pub struct NotificationListParams {
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}

#[derive(Debug, Serialize)]
pub struct MarkAllReadResponse {
    pub updated: u64,
}

/// POST /api/notifications
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNotification>,
) -> AppResult<(StatusCode, Json<Notification>)> {
    validate_type(&input.notification_type)?;
    validate_title(&input.title)?;
    validate_message(&input.message)?;
    UserRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or(AppError::not_found("User", input.user_id))?;

    let notification = NotificationRepo::create(&state.pool, &input).await?;
    let payload = serde_json::to_value(&notification).unwrap_or_default();
    let delivered = state
        .ws_manager
        .notify_user(notification.user_id, &payload)
        .await;
    tracing::info!(
        notification_id = notification.id,
        user_id = notification.user_id,
        delivered,
        "Notification created"
    );
    Ok((StatusCode::CREATED, Json(notification)))
}

/// GET /api/notifications/user/{user_id}
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Query(params): Query<NotificationListParams>,
) -> AppResult<Json<Vec<Notification>>> {
    let notifications = NotificationRepo::list_for_user(
        &state.pool,
        user_id,
        params.unread_only,
        clamp_limit(params.limit),
        clamp_offset(params.offset),
    )
    .await?;
    Ok(Json(notifications))
}

/// GET /api/notifications/user/{user_id}/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<UnreadCountResponse>> {
    let unread_count = NotificationRepo::unread_count(&state.pool, user_id).await?;
    Ok(Json(UnreadCountResponse { unread_count }))
}

/// POST /api/notifications/user/{user_id}/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<MarkAllReadResponse>> {
    let updated = NotificationRepo::mark_all_read(&state.pool, user_id).await?;
    tracing::info!(user_id, updated, "Notifications marked read");
    Ok(Json(MarkAllReadResponse { updated }))
}

/// POST /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if NotificationRepo::mark_read(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Notification", id))
    }
}
